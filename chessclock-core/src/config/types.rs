//! Configuration type definitions
//!
//! The firmware embeds these values at build time. With the `serde`
//! feature the same types deserialize from the firmware's TOML file.

use crate::indicator::Palette;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default starting time per player in seconds
pub const DEFAULT_STARTING_SECONDS: u32 = 60;

/// Default starting-time adjustment per button press in seconds
pub const DEFAULT_STEP_SECONDS: u32 = 10;

/// Default ticker period in milliseconds
pub const DEFAULT_TICK_PERIOD_MS: u32 = 1000;

/// Default turn indicator poll period in milliseconds
pub const DEFAULT_INDICATOR_PERIOD_MS: u32 = 100;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Starting time must be positive
    ZeroStartingTime,
    /// Adjustment step must be positive
    ZeroStep,
    /// Ticker period must be positive
    ZeroTickPeriod,
    /// Indicator poll period must be positive
    ZeroIndicatorPeriod,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroStartingTime => f.write_str("starting_seconds must be greater than 0"),
            ConfigError::ZeroStep => f.write_str("step_seconds must be greater than 0"),
            ConfigError::ZeroTickPeriod => f.write_str("tick_period_ms must be greater than 0"),
            ConfigError::ZeroIndicatorPeriod => {
                f.write_str("indicator_period_ms must be greater than 0")
            }
        }
    }
}

/// Clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Time on each clock when a game is set up (seconds)
    pub starting_seconds: u32,
    /// Amount added/removed by the adjust keys (seconds)
    pub step_seconds: u32,
    /// Ticker period (ms); one second of game time per tick
    pub tick_period_ms: u32,
    /// Turn LED poll period (ms)
    pub indicator_period_ms: u32,
    /// Turn LED colors
    pub palette: Palette,
}

impl ClockConfig {
    /// Built-in defaults: one minute per player, ten second steps
    pub const fn new() -> Self {
        Self {
            starting_seconds: DEFAULT_STARTING_SECONDS,
            step_seconds: DEFAULT_STEP_SECONDS,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            indicator_period_ms: DEFAULT_INDICATOR_PERIOD_MS,
            palette: Palette::new(),
        }
    }

    /// Check the configuration for values the clock cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_seconds == 0 {
            return Err(ConfigError::ZeroStartingTime);
        }
        if self.step_seconds == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.indicator_period_ms == 0 {
            return Err(ConfigError::ZeroIndicatorPeriod);
        }
        Ok(())
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::new()
    }
}
