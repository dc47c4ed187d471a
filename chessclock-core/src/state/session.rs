//! Session state record
//!
//! The single source of truth for the clock: phase, whose turn it is,
//! the starting allotment and both remaining counters. The ticker and the
//! button dispatcher are the only writers (see [`crate::shared`]).

use super::events::Button;
use super::machine::{transition, Action, Phase, Player};
use crate::config::ClockConfig;

/// Shared mutable record of the clock
///
/// Invariants upheld by [`SessionState::press`] and [`SessionState::tick`]:
/// - in `Setup` both remaining counters equal `configured_seconds`
/// - in `Running` the active player's counter is positive
/// - `configured_seconds` is never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionState {
    pub(crate) phase: Phase,
    pub(crate) active_player: Player,
    pub(crate) configured_seconds: u32,
    pub(crate) step_seconds: u32,
    pub(crate) remaining_seconds: [u32; 2],
}

/// Result of a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Press {
    /// What the transition table resolved the press to
    pub action: Action,
    /// Whether any field of the session changed
    pub changed: bool,
}

/// Result of one ticker period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Clock not running; nothing happened
    Idle,
    /// One second taken from this player
    Counted(Player),
    /// This player's clock just reached zero
    Expired(Player),
}

impl Tick {
    /// Check if the display must be refreshed
    pub fn refreshes(&self) -> bool {
        !matches!(self, Tick::Idle)
    }

    /// Check if this tick is the transition into `Expired`
    pub fn expired(&self) -> bool {
        matches!(self, Tick::Expired(_))
    }
}

/// Snapshot handed to the display worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockView {
    /// Starting allotment (full scale of the bars)
    pub configured_seconds: u32,
    /// Remaining seconds, indexed by [`Player::index`]
    pub remaining_seconds: [u32; 2],
    /// Player whose clock is running, if any
    pub highlighted: Option<Player>,
}

impl ClockView {
    /// Remaining seconds for a player
    pub fn remaining(&self, player: Player) -> u32 {
        self.remaining_seconds[player.index()]
    }

    /// Check if a player should be shown as the one to move
    pub fn is_active(&self, player: Player) -> bool {
        self.highlighted == Some(player)
    }
}

impl SessionState {
    /// Fresh session in `Setup`, player A to move
    pub const fn new(config: &ClockConfig) -> Self {
        Self {
            phase: Phase::Setup,
            active_player: Player::A,
            configured_seconds: config.starting_seconds,
            step_seconds: config.step_seconds,
            remaining_seconds: [config.starting_seconds, config.starting_seconds],
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn configured_seconds(&self) -> u32 {
        self.configured_seconds
    }

    pub fn step_seconds(&self) -> u32 {
        self.step_seconds
    }

    /// Remaining seconds for a player
    pub fn remaining(&self, player: Player) -> u32 {
        self.remaining_seconds[player.index()]
    }

    /// Snapshot for rendering
    pub fn view(&self) -> ClockView {
        ClockView {
            configured_seconds: self.configured_seconds,
            remaining_seconds: self.remaining_seconds,
            highlighted: self.phase.ticks().then_some(self.active_player),
        }
    }

    /// Apply a button press
    pub fn press(&mut self, button: Button) -> Press {
        let before = *self;
        let action = transition(self.phase, self.active_player, button);
        self.apply(action);
        Press {
            action,
            changed: *self != before,
        }
    }

    /// Advance the running clock by one second
    ///
    /// Reaching zero moves to `Expired`; further ticks are idle until the
    /// session is reset, so the expiry is reported exactly once.
    pub fn tick(&mut self) -> Tick {
        if !self.phase.ticks() {
            return Tick::Idle;
        }

        let player = self.active_player;
        let slot = &mut self.remaining_seconds[player.index()];
        match slot.checked_sub(1) {
            Some(left) => {
                *slot = left;
                if left == 0 {
                    self.phase = Phase::Expired;
                    Tick::Expired(player)
                } else {
                    Tick::Counted(player)
                }
            }
            // Running with an empty clock: expire without going negative
            None => {
                self.phase = Phase::Expired;
                Tick::Expired(player)
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Ignore => {}
            Action::AddStep => {
                if let Some(seconds) = self.configured_seconds.checked_add(self.step_seconds) {
                    self.configured_seconds = seconds;
                }
                self.refill();
            }
            Action::RemoveStep => {
                if self.configured_seconds > self.step_seconds {
                    self.configured_seconds -= self.step_seconds;
                }
                self.refill();
            }
            Action::Start(player) => {
                self.active_player = player;
                self.phase = Phase::Running;
            }
            Action::HandOver(player) => {
                self.active_player = player;
            }
            Action::Resume => {
                self.phase = Phase::Running;
            }
            Action::Pause => {
                self.phase = Phase::Paused;
            }
            Action::EnterSetup => {
                self.phase = Phase::Setup;
                self.refill();
            }
        }
    }

    fn refill(&mut self) {
        self.remaining_seconds = [self.configured_seconds; 2];
    }
}
