//! Display backend trait
//!
//! Defines the interface for character-cell panels.

use chessclock_core::DisplayError;

/// Display backend trait
///
/// Provides a hardware-agnostic interface for drawing into a panel's
/// frame buffer. Pushing the buffer to the hardware is left to the
/// implementation, since it is usually an async bus transfer.
pub trait DisplayBackend {
    /// Clear the entire frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Invert a region on the specified row (for emphasis)
    ///
    /// - `row`: Row number
    /// - `start_col`: Starting column
    /// - `end_col`: Ending column (exclusive)
    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
