//! Board-agnostic core logic for the chess clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Clock state machine (phases, players, button transitions)
//! - The shared session record and its locking discipline
//! - Tick / button / indicator operations used by the firmware tasks
//! - The bounded press queue feeding the button dispatcher
//! - Configuration type definitions
//! - Hardware abstraction traits (display, turn LED)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod indicator;
pub mod queue;
pub mod shared;
pub mod state;
pub mod traits;

pub use config::{ClockConfig, ConfigError};
pub use controller::{ClockNotifier, Controller, InputError};
pub use indicator::{indicator_color, Palette, Rgb};
pub use queue::{PressQueue, PRESS_QUEUE_DEPTH};
pub use shared::SharedSession;
pub use state::{Button, ClockView, Phase, Player, Press, SessionState, Tick};
pub use traits::{ClockDisplay, ClockDisplayExt, DisplayError, TurnLed};
