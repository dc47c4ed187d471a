//! Display abstraction and clock screen layout for the chessclock
//!
//! This crate provides:
//! - `DisplayBackend` trait for character-cell displays (OLED, LCD, ...)
//! - `Screen`, a text buffer with per-row highlights rendered to any backend
//! - `ClockScreen`, the two-clock layout implementing `ClockDisplay`
//! - `FrameBuffer`, a 128x64 pixel backend drawn with embedded-graphics
//!
//! # Architecture
//!
//! The firmware feeds `ClockView` snapshots into a `ClockScreen`, renders
//! the resulting `Screen` into its panel driver and then flushes the
//! panel. Only the last step touches the bus, so everything here is
//! host-testable.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod clock;
pub mod framebuffer;
pub mod screen;

// Re-export key types
pub use backend::DisplayBackend;
pub use chessclock_core::DisplayError;
pub use clock::{format_time, progress_cells, ClockScreen, BAR_CELLS, LEGEND, TITLE};
pub use framebuffer::FrameBuffer;
pub use screen::{Screen, LINE_LEN, SCREEN_COLS, SCREEN_ROWS};
