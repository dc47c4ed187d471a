//! Turn indicator LED trait

use crate::indicator::Rgb;

/// An RGB LED showing whose turn it is
///
/// Best effort: the indicator task does not consult any result.
pub trait TurnLed {
    /// Drive the LED to a color (`Rgb::OFF` turns it off)
    fn set_color(&mut self, color: Rgb);
}
