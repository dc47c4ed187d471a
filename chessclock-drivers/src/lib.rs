//! Output driver implementations
//!
//! Pure driver logic for the clock's peripherals. Each driver turns a
//! high-level request into the register values the firmware writes to
//! the RP2040 PWM slices:
//!
//! - RGB turn LED (color to per-channel compare values)
//! - Alarm buzzer (tone pattern to PWM period/duty and durations)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod led;

pub use buzzer::{BuzzerConfig, BuzzerError, PwmSetting, Step, Tone, ALARM_PATTERN};
pub use led::{RgbLed, RgbLedConfig};
