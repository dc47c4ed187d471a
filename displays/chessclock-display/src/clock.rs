//! Two-clock screen layout
//!
//! ```text
//!      Chess clock
//!
//! [x] P1     [ ] P2
//!  01 : 00    00 : 42
//! ########## #######...
//!
//!
//! <P1 - Rst Pause + P2>
//! ```
//!
//! Player 1 owns the left half, player 2 the right half. The active
//! player's label is shown inverted as well as ticked.

use core::fmt::Write;

use chessclock_core::{ClockDisplay, DisplayError, Player};
use heapless::String;

use crate::backend::DisplayBackend;
use crate::screen::{Screen, LINE_LEN, SCREEN_COLS};

/// Title shown on the top row
pub const TITLE: &str = "Chess clock";

/// Button legend, left to right as the keys are mounted
pub const LEGEND: &str = "<P1 - Rst Pause + P2>";

/// Cells in each progress bar
pub const BAR_CELLS: usize = 10;

const TITLE_ROW: usize = 0;
const LABEL_ROW: usize = 2;
const TIME_ROW: usize = 3;
const BAR_ROW: usize = 4;
const LEGEND_ROW: usize = 7;

/// Width of the left half
const LEFT_WIDTH: usize = 10;
/// First column of the right half
const RIGHT_COLUMN: usize = LEFT_WIDTH + 1;

/// Format seconds as `MM : SS`
///
/// Minutes are zero-padded to two digits and grow past that as needed.
pub fn format_time(seconds: u32) -> String<16> {
    let mut text = String::new();
    let _ = write!(text, "{:02} : {:02}", seconds / 60, seconds % 60);
    text
}

/// Filled cells for a bar spanning `0..=max_seconds`
///
/// Rounded up, so any remaining time shows at least one cell.
pub fn progress_cells(max_seconds: u32, remaining_seconds: u32) -> usize {
    if max_seconds == 0 {
        return 0;
    }
    let remaining = remaining_seconds.min(max_seconds) as u64;
    let max = max_seconds as u64;
    ((remaining * BAR_CELLS as u64).div_ceil(max)) as usize
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slot {
    max_seconds: u32,
    remaining_seconds: u32,
    active: bool,
}

/// Clock layout backed by a [`Screen`]
pub struct ClockScreen {
    screen: Screen,
    slots: [Slot; 2],
}

impl Default for ClockScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockScreen {
    /// Empty clocks with title and legend in place
    pub fn new() -> Self {
        let mut clock = Self {
            screen: Screen::new(),
            slots: [Slot::default(); 2],
        };
        clock.screen.set_line(TITLE_ROW, centered(TITLE).as_str());
        clock.screen.set_line(LEGEND_ROW, LEGEND);
        clock.layout();
        clock
    }

    /// Current screen contents
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Force the next render to redraw everything
    ///
    /// Used when the panel lost what was last rendered, e.g. after a
    /// failed flush.
    pub fn invalidate(&mut self) {
        self.screen.mark_dirty();
    }

    /// Draw into a backend if anything changed
    pub fn render<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<bool, DisplayError> {
        self.screen.render(backend)
    }

    fn layout(&mut self) {
        let [a, b] = self.slots;

        let label_a = label(Player::A, a.active);
        let label_b = label(Player::B, b.active);
        self.screen
            .set_line(LABEL_ROW, columns(label_a.as_str(), label_b.as_str()).as_str());

        let mut time_a: String<LINE_LEN> = String::new();
        let mut time_b: String<LINE_LEN> = String::new();
        let _ = write!(time_a, " {}", format_time(a.remaining_seconds));
        let _ = write!(time_b, " {}", format_time(b.remaining_seconds));
        self.screen
            .set_line(TIME_ROW, columns(time_a.as_str(), time_b.as_str()).as_str());

        let bars = columns(bar(a).as_str(), bar(b).as_str());
        self.screen.set_line(BAR_ROW, bars.as_str());

        match (a.active, b.active) {
            (true, _) => self.screen.set_highlight(LABEL_ROW, 0, LEFT_WIDTH as u8),
            (false, true) => {
                self.screen
                    .set_highlight(LABEL_ROW, RIGHT_COLUMN as u8, SCREEN_COLS as u8)
            }
            (false, false) => self.screen.clear_highlight(LABEL_ROW),
        }
    }
}

impl ClockDisplay for ClockScreen {
    fn set_clock(
        &mut self,
        player: Player,
        max_seconds: u32,
        remaining_seconds: u32,
    ) -> Result<(), DisplayError> {
        let slot = &mut self.slots[player.index()];
        slot.max_seconds = max_seconds;
        slot.remaining_seconds = remaining_seconds;
        self.layout();
        Ok(())
    }

    fn set_active(&mut self, player: Player, active: bool) -> Result<(), DisplayError> {
        self.slots[player.index()].active = active;
        self.layout();
        Ok(())
    }
}

fn label(player: Player, active: bool) -> String<LINE_LEN> {
    let mut text = String::new();
    let marker = if active { "[x]" } else { "[ ]" };
    let number = match player {
        Player::A => 1,
        Player::B => 2,
    };
    let _ = write!(text, "{} P{}", marker, number);
    text
}

fn bar(slot: Slot) -> String<LINE_LEN> {
    let filled = progress_cells(slot.max_seconds, slot.remaining_seconds);
    let mut text = String::new();
    for cell in 0..BAR_CELLS {
        let _ = text.push(if cell < filled { '#' } else { '.' });
    }
    text
}

fn centered(text: &str) -> String<LINE_LEN> {
    let mut line = String::new();
    let pad = LINE_LEN.saturating_sub(text.len()) / 2;
    for _ in 0..pad {
        let _ = line.push(' ');
    }
    let _ = line.push_str(text);
    line
}

/// Place two strings in the left and right halves of a row
fn columns(left: &str, right: &str) -> String<LINE_LEN> {
    let mut line: String<LINE_LEN> = String::new();
    for c in left.chars().take(LEFT_WIDTH) {
        let _ = line.push(c);
    }
    while line.len() < RIGHT_COLUMN {
        let _ = line.push(' ');
    }
    for c in right.chars() {
        if line.push(c).is_err() {
            break;
        }
    }
    line
}
