//! Hardware abstraction traits
//!
//! These traits define the interface between the clock logic and the
//! output peripherals. Implementations live in the display and firmware
//! crates.

pub mod display;
pub mod led;

pub use display::{ClockDisplay, ClockDisplayExt, DisplayError};
pub use led::TurnLed;
