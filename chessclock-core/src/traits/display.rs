//! Clock display trait

use crate::state::{ClockView, Player};

/// Errors that can occur while updating the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication with the panel failed
    Communication,
    /// Text or graphics fell outside the panel
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Trait for the two-clock display
///
/// Both calls are idempotent; implementations may buffer and flush later.
pub trait ClockDisplay {
    /// Show a player's remaining time against the full allotment
    fn set_clock(
        &mut self,
        player: Player,
        max_seconds: u32,
        remaining_seconds: u32,
    ) -> Result<(), DisplayError>;

    /// Emphasize (or clear) the player to move
    fn set_active(&mut self, player: Player, active: bool) -> Result<(), DisplayError>;
}

/// Helper trait for drawing a whole snapshot
pub trait ClockDisplayExt: ClockDisplay {
    /// Update both clocks, then both turn markers
    fn show(&mut self, view: &ClockView) -> Result<(), DisplayError> {
        for player in Player::ALL {
            self.set_clock(player, view.configured_seconds, view.remaining(player))?;
        }
        for player in Player::ALL {
            self.set_active(player, view.is_active(player))?;
        }
        Ok(())
    }
}

// Blanket implementation for all ClockDisplay types
impl<T: ClockDisplay> ClockDisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Calls {
        clocks: Vec<(Player, u32, u32)>,
        active: Vec<(Player, bool)>,
        fail_active: bool,
    }

    impl ClockDisplay for Calls {
        fn set_clock(
            &mut self,
            player: Player,
            max_seconds: u32,
            remaining_seconds: u32,
        ) -> Result<(), DisplayError> {
            self.clocks.push((player, max_seconds, remaining_seconds));
            Ok(())
        }

        fn set_active(&mut self, player: Player, active: bool) -> Result<(), DisplayError> {
            if self.fail_active {
                return Err(DisplayError::Communication);
            }
            self.active.push((player, active));
            Ok(())
        }
    }

    #[test]
    fn test_show_updates_both_players() {
        let view = ClockView {
            configured_seconds: 300,
            remaining_seconds: [120, 45],
            highlighted: Some(Player::B),
        };
        let mut calls = Calls::default();
        calls.show(&view).unwrap();

        assert_eq!(
            calls.clocks,
            vec![(Player::A, 300, 120), (Player::B, 300, 45)]
        );
        assert_eq!(calls.active, vec![(Player::A, false), (Player::B, true)]);
    }

    #[test]
    fn test_show_propagates_errors() {
        let view = ClockView {
            configured_seconds: 60,
            remaining_seconds: [60, 60],
            highlighted: None,
        };
        let mut calls = Calls {
            fail_active: true,
            ..Calls::default()
        };
        assert_eq!(calls.show(&view), Err(DisplayError::Communication));
        assert_eq!(calls.clocks.len(), 2);
    }
}
