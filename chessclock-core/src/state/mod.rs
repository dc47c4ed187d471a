//! Clock state machine
//!
//! Defines the authoritative runtime behavior of the clock.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;
pub mod session;

pub use events::Button;
pub use machine::{transition, Action, Phase, Player};
pub use session::{ClockView, Press, SessionState, Tick};
