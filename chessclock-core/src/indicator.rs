//! Turn indicator color mapping

use crate::state::{Phase, Player, SessionState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// LED off
    pub const OFF: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Check if all channels are dark
    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }
}

/// Per-player LED colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub player_a: Rgb,
    pub player_b: Rgb,
}

impl Palette {
    /// Red for player A, blue for player B
    pub const fn new() -> Self {
        Self {
            player_a: Rgb::new(100, 0, 0),
            player_b: Rgb::new(0, 0, 100),
        }
    }

    /// Color assigned to a player
    pub fn color(&self, player: Player) -> Rgb {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Color the turn LED should show for a session snapshot
///
/// Lit in the active player's color only while the clock runs.
pub fn indicator_color(state: &SessionState, palette: &Palette) -> Rgb {
    match state.phase() {
        Phase::Running => palette.color(state.active_player()),
        Phase::Setup | Phase::Paused | Phase::Expired => Rgb::OFF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockConfig;
    use crate::state::Button;

    #[test]
    fn test_off_outside_running() {
        let palette = Palette::default();
        let mut state = SessionState::new(&ClockConfig::new());
        assert!(indicator_color(&state, &palette).is_off());

        state.press(Button::ClaimB);
        state.press(Button::PlayPause);
        assert_eq!(state.phase(), Phase::Paused);
        assert!(indicator_color(&state, &palette).is_off());
    }

    #[test]
    fn test_active_player_color_while_running() {
        let palette = Palette::default();
        let mut state = SessionState::new(&ClockConfig::new());

        state.press(Button::ClaimA);
        assert_eq!(indicator_color(&state, &palette), Rgb::new(100, 0, 0));

        state.press(Button::ClaimB);
        assert_eq!(indicator_color(&state, &palette), Rgb::new(0, 0, 100));
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette {
            player_a: Rgb::new(0, 255, 0),
            player_b: Rgb::new(255, 255, 0),
        };
        let mut state = SessionState::new(&ClockConfig::new());
        state.press(Button::ClaimB);
        assert_eq!(indicator_color(&state, &palette), Rgb::new(255, 255, 0));
    }
}
