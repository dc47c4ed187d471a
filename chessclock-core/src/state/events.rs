//! Button events that drive state transitions

/// Physical clock buttons
///
/// Discriminants are the raw ids carried on the input queue, in the
/// left-to-right order of the keys on the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Button {
    /// Player A's key: ends B's turn, or picks A to move first
    ClaimA = 0,
    /// Subtract one step from the starting time
    AdjustDown = 1,
    /// Back to setup with full time on both clocks
    Reset = 2,
    /// Pause a running clock, or resume a paused one
    PlayPause = 3,
    /// Add one step to the starting time
    AdjustUp = 4,
    /// Player B's key: ends A's turn, or picks B to move first
    ClaimB = 5,
}

impl Button {
    /// All buttons in raw id order
    pub const ALL: [Button; 6] = [
        Button::ClaimA,
        Button::AdjustDown,
        Button::Reset,
        Button::PlayPause,
        Button::AdjustUp,
        Button::ClaimB,
    ];

    /// Decode a raw button id
    ///
    /// Returns `None` for ids outside the six known keys.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Raw id of this button
    pub fn id(self) -> u8 {
        self as u8
    }
}
