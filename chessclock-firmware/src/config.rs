//! Build-time clock configuration
//!
//! `build.rs` validates clock.toml and renders it into `CLOCK_CONFIG`.
//! There is no runtime override; edit the file and rebuild.

use chessclock_core::{ClockConfig, Palette, Rgb};

include!(concat!(env!("OUT_DIR"), "/clock_config.rs"));
