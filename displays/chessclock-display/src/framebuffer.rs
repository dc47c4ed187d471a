//! Monochrome frame buffer for 128x64 page-addressed panels
//!
//! Glyphs come from embedded-graphics' 5x8 font. The font has no
//! spacing of its own, so a one-pixel gap is added to land each glyph
//! on the 6x8 character cell that [`Screen`](crate::Screen) and
//! `invert_region` assume.

use chessclock_core::DisplayError;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::backend::DisplayBackend;
use crate::screen::{SCREEN_COLS, SCREEN_ROWS};

/// Panel width in pixels
pub const WIDTH: usize = 128;
/// Panel height in pixels
pub const HEIGHT: usize = 64;
/// 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Character cell size in pixels
pub const CELL_WIDTH: usize = 6;
pub const CELL_HEIGHT: usize = 8;

/// 5x8 glyphs advanced by one full cell
const CELL_FONT: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

const _: () = assert!(
    CELL_FONT.character_size.width + CELL_FONT.character_spacing == CELL_WIDTH as u32
);

/// 1 bit per pixel, organized as pages of vertical bytes
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Bytes of one page, column by column
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.pages.get(page)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }
            let bit = 1u8 << (y % 8);
            let byte = &mut self.pages[y / 8][x];
            if color.is_on() {
                *byte |= bit;
            } else {
                *byte &= !bit;
            }
        }
        Ok(())
    }
}

impl DisplayBackend for FrameBuffer {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row as usize >= SCREEN_ROWS || col as usize >= SCREEN_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let style = MonoTextStyle::new(&CELL_FONT, BinaryColor::On);
        let origin = Point::new(
            (col as usize * CELL_WIDTH) as i32,
            (row as usize * CELL_HEIGHT) as i32,
        );
        match Text::with_baseline(text, origin, style, Baseline::Top).draw(self) {
            Ok(_) => Ok(()),
            Err(never) => match never {},
        }
    }

    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
        let page = self
            .pages
            .get_mut(row as usize)
            .ok_or(DisplayError::InvalidCoordinates)?;
        let start_x = (start_col as usize * CELL_WIDTH).min(WIDTH);
        let end_x = (end_col as usize * CELL_WIDTH).min(WIDTH);

        for byte in &mut page[start_x..end_x.max(start_x)] {
            *byte ^= 0xFF;
        }

        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::LEGEND;

    fn pixel(buffer: &FrameBuffer, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && buffer.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    fn lit_columns(buffer: &FrameBuffer, row: usize) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&x| buffer.pages[row][x] != 0)
    }

    #[test]
    fn test_line_advances_one_cell_per_char() {
        let line = "#####################";
        assert_eq!(line.len(), SCREEN_COLS);

        let mut whole = FrameBuffer::new();
        whole.draw_text(1, 0, line).unwrap();

        let mut single = FrameBuffer::new();
        for col in 0..SCREEN_COLS {
            single.draw_text(1, col as u8, "#").unwrap();
        }

        assert_eq!(whole.pages, single.pages);
    }

    #[test]
    fn test_last_column_lands_in_last_cell() {
        let mut buffer = FrameBuffer::new();
        buffer.draw_text(7, 0, LEGEND).unwrap();

        // '>' is the 21st character, drawn in pixels 120..126
        let last = (SCREEN_COLS - 1) * CELL_WIDTH;
        assert!(lit_columns(&buffer, 7).any(|x| x >= last));
        assert!(lit_columns(&buffer, 7).all(|x| x < SCREEN_COLS * CELL_WIDTH));
    }

    #[test]
    fn test_invert_covers_whole_cells() {
        let mut buffer = FrameBuffer::new();
        buffer.invert_region(2, 11, 21).unwrap();

        assert!(!pixel(&buffer, 11 * CELL_WIDTH - 1, 16));
        assert!(pixel(&buffer, 11 * CELL_WIDTH, 16));
        assert!(pixel(&buffer, 21 * CELL_WIDTH - 1, 23));
        assert!(!pixel(&buffer, 21 * CELL_WIDTH, 16));
    }

    #[test]
    fn test_rejects_out_of_range_cells() {
        let mut buffer = FrameBuffer::new();
        assert_eq!(
            buffer.draw_text(SCREEN_ROWS as u8, 0, "x"),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            buffer.invert_region(SCREEN_ROWS as u8, 0, 1),
            Err(DisplayError::InvalidCoordinates)
        );
    }
}
