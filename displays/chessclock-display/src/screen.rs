//! Screen buffer types
//!
//! Provides a character-based screen buffer sized for a 128x64 OLED
//! with 6x8 character cells.

use chessclock_core::DisplayError;
use heapless::String;

use crate::backend::DisplayBackend;

/// Number of character rows (64 px / 8 px)
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns (128 px / 6 px)
pub const SCREEN_COLS: usize = 21;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// Holds the text and highlight state of every row and can be rendered
/// to any `DisplayBackend` implementation.
#[derive(Clone)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Highlight state per row (start_col, end_col)
    highlights: [Option<(u8, u8)>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            highlights: [None; SCREEN_ROWS],
            dirty: true,
        }
    }

    /// Set the content of a specific row
    ///
    /// Text past the last column is cut off. Only marks the screen dirty
    /// when the row actually changes.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        // Truncate on a char boundary
        let end = text
            .char_indices()
            .nth(LINE_LEN)
            .map_or(text.len(), |(index, _)| index);
        let text = &text[..end];
        if line.as_str() == text {
            return;
        }
        line.clear();
        let _ = line.push_str(text);
        self.dirty = true;
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Set highlight (invert) region for a row
    pub fn set_highlight(&mut self, row: usize, start_col: u8, end_col: u8) {
        self.update_highlight(row, Some((start_col, end_col)));
    }

    /// Clear highlight for a row
    pub fn clear_highlight(&mut self, row: usize) {
        self.update_highlight(row, None);
    }

    fn update_highlight(&mut self, row: usize, region: Option<(u8, u8)>) {
        if let Some(highlight) = self.highlights.get_mut(row) {
            if *highlight != region {
                *highlight = region;
                self.dirty = true;
            }
        }
    }

    /// Get highlight region for a row
    pub fn get_highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Draw the whole screen into a backend
    ///
    /// Returns `Ok(false)` without touching the backend when nothing
    /// changed since the last successful render.
    pub fn render<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        if !self.dirty {
            return Ok(false);
        }
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }
        let (cols, rows) = backend.dimensions();
        if (cols as usize) < SCREEN_COLS || (rows as usize) < SCREEN_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }

        backend.clear()?;
        for (row, line) in self.lines.iter().enumerate() {
            if !line.is_empty() {
                backend.draw_text(row as u8, 0, line.as_str())?;
            }
        }
        for (row, highlight) in self.highlights.iter().enumerate() {
            if let Some((start, end)) = highlight {
                backend.invert_region(row as u8, *start, *end)?;
            }
        }

        self.dirty = false;
        Ok(true)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Character grid standing in for a panel
    pub(crate) struct MemoryBackend {
        pub cells: [[u8; SCREEN_COLS]; SCREEN_ROWS],
        pub inverted: [[bool; SCREEN_COLS]; SCREEN_ROWS],
        pub clears: u32,
        pub ready: bool,
    }

    impl MemoryBackend {
        pub fn new() -> Self {
            Self {
                cells: [[b' '; SCREEN_COLS]; SCREEN_ROWS],
                inverted: [[false; SCREEN_COLS]; SCREEN_ROWS],
                clears: 0,
                ready: true,
            }
        }

        pub fn row(&self, row: usize) -> String<LINE_LEN> {
            let mut text = String::new();
            for &cell in &self.cells[row] {
                let _ = text.push(cell as char);
            }
            text
        }
    }

    impl DisplayBackend for MemoryBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            *self = Self {
                clears: self.clears + 1,
                ready: self.ready,
                ..Self::new()
            };
            Ok(())
        }

        fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
            let cells = self
                .cells
                .get_mut(row as usize)
                .ok_or(DisplayError::InvalidCoordinates)?;
            for (offset, byte) in text.bytes().enumerate() {
                let col = col as usize + offset;
                if col >= SCREEN_COLS {
                    return Err(DisplayError::InvalidCoordinates);
                }
                cells[col] = byte;
            }
            Ok(())
        }

        fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
            let row = self
                .inverted
                .get_mut(row as usize)
                .ok_or(DisplayError::InvalidCoordinates)?;
            for cell in row.iter_mut().take(end_col as usize).skip(start_col as usize) {
                *cell = !*cell;
            }
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (SCREEN_COLS as u8, SCREEN_ROWS as u8)
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }

    #[test]
    fn test_set_line_truncates() {
        let mut screen = Screen::new();
        screen.set_line(0, "0123456789012345678901234");
        assert_eq!(screen.get_line(0), Some("012345678901234567890"));
        screen.set_line(SCREEN_ROWS, "ignored");
        assert_eq!(screen.get_line(SCREEN_ROWS), None);
    }

    #[test]
    fn test_unchanged_line_keeps_screen_clean() {
        let mut screen = Screen::new();
        let mut backend = MemoryBackend::new();
        screen.set_line(1, "hello");
        assert!(screen.render(&mut backend).unwrap());

        screen.set_line(1, "hello");
        screen.clear_highlight(1);
        assert!(!screen.is_dirty());
        assert!(!screen.render(&mut backend).unwrap());
        assert_eq!(backend.clears, 1);
    }

    #[test]
    fn test_render_draws_lines_and_highlights() {
        let mut screen = Screen::new();
        let mut backend = MemoryBackend::new();
        screen.set_line(0, "top");
        screen.set_line(7, "bottom");
        screen.set_highlight(7, 0, 3);
        screen.render(&mut backend).unwrap();

        assert_eq!(backend.row(0).trim_end(), "top");
        assert_eq!(backend.row(7).trim_end(), "bottom");
        assert!(backend.inverted[7][..3].iter().all(|cell| *cell));
        assert!(!backend.inverted[7][3]);
        assert!(!backend.inverted[0][0]);
    }

    #[test]
    fn test_render_refuses_unready_backend() {
        let mut screen = Screen::new();
        let mut backend = MemoryBackend::new();
        backend.ready = false;
        assert_eq!(
            screen.render(&mut backend),
            Err(DisplayError::NotInitialized)
        );
        // Still dirty, so the next attempt redraws
        assert!(screen.is_dirty());
    }
}
