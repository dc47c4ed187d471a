//! State machine definition
//!
//! Every button press is resolved to an [`Action`] by a pure function of
//! the current phase, the active player and the button. The session then
//! applies the action to its counters.

use super::events::Button;

/// Coarse operating mode of the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Both clocks show the starting time, which may be adjusted
    Setup,
    /// Clocks frozen mid-game
    Paused,
    /// The active player's clock is counting down
    Running,
    /// A clock reached zero; any key returns to setup
    Expired,
}

impl Phase {
    /// Check if the ticker decrements in this phase
    pub fn ticks(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Both players, A first
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// The opponent
    pub fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Index into per-player arrays
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

/// Effect of a button press on the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Nothing changes
    Ignore,
    /// Add one step to the starting time and refill both clocks
    AddStep,
    /// Remove one step from the starting time (if it stays positive)
    RemoveStep,
    /// Start (or restart from pause) with the given player to move
    Start(Player),
    /// Turn handover while running
    HandOver(Player),
    /// Run again with the remembered active player
    Resume,
    /// Freeze the clocks
    Pause,
    /// Back to setup with both clocks refilled
    EnterSetup,
}

impl Action {
    /// Check if this action leaves the session untouched
    pub fn is_ignore(&self) -> bool {
        matches!(self, Action::Ignore)
    }
}

/// Resolve a button press
///
/// This is the core transition table. `Reset` wins from every phase and
/// any key leaves `Expired`.
pub fn transition(phase: Phase, active: Player, button: Button) -> Action {
    use Phase::*;

    match (phase, button) {
        (_, Button::Reset) => Action::EnterSetup,
        (Expired, _) => Action::EnterSetup,

        // Setup: edit the starting time
        (Setup, Button::AdjustUp) => Action::AddStep,
        (Setup, Button::AdjustDown) => Action::RemoveStep,

        // Setup/Paused: claim key picks who moves and starts the clock
        (Setup | Paused, Button::ClaimA) => Action::Start(Player::A),
        (Setup | Paused, Button::ClaimB) => Action::Start(Player::B),
        (Setup | Paused, Button::PlayPause) => Action::Resume,

        // Running: claim key hands the turn over, own key is a no-op
        (Running, Button::ClaimA) if active == Player::B => Action::HandOver(Player::A),
        (Running, Button::ClaimB) if active == Player::A => Action::HandOver(Player::B),
        (Running, Button::PlayPause) => Action::Pause,

        // Default: stay in current state
        _ => Action::Ignore,
    }
}
