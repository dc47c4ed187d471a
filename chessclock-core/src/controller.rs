//! Clock operations driven by the firmware tasks
//!
//! The ticker, the button dispatcher and the turn indicator each call one
//! method here. The session is mutated inside [`SharedSession`]'s critical
//! section; the notifier is only invoked once the lock is released, so
//! slow display or audio work never holds up the next tick.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::indicator::{indicator_color, Palette, Rgb};
use crate::shared::SharedSession;
use crate::state::{Button, ClockView, Press, Tick};

/// Signal-and-resume targets woken by the controller
///
/// Implementations must not block: the firmware hands the view to a
/// worker task and returns.
pub trait ClockNotifier {
    /// Redraw both clocks from this snapshot
    fn refresh(&self, view: ClockView);

    /// Sound the timeout alarm
    fn alarm(&self);
}

impl<T: ClockNotifier + ?Sized> ClockNotifier for &T {
    fn refresh(&self, view: ClockView) {
        (**self).refresh(view)
    }

    fn alarm(&self) {
        (**self).alarm()
    }
}

/// Errors from the input path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Raw id does not name one of the six buttons
    UnknownButton(u8),
    /// Press queue was full; the press was dropped
    QueueFull(u8),
}

/// Session plus the notifier its changes are reported to
pub struct Controller<'a, M: RawMutex, N: ClockNotifier> {
    session: &'a SharedSession<M>,
    notifier: N,
}

impl<'a, M: RawMutex, N: ClockNotifier> Controller<'a, M, N> {
    pub const fn new(session: &'a SharedSession<M>, notifier: N) -> Self {
        Self { session, notifier }
    }

    /// Ticker period elapsed
    ///
    /// Refreshes the display whenever the running branch was taken and
    /// sounds the alarm on the transition into `Expired`.
    pub fn on_tick(&self) -> Tick {
        let (tick, view) = self.session.tick();
        if tick.expired() {
            self.notifier.alarm();
        }
        if tick.refreshes() {
            self.notifier.refresh(view);
        }
        tick
    }

    /// Raw button id dequeued from the input queue
    ///
    /// One refresh per press, and only if the press changed something.
    pub fn on_button(&self, raw: u8) -> Result<(Button, Press), InputError> {
        let button = Button::from_id(raw).ok_or(InputError::UnknownButton(raw))?;
        let (press, view) = self.session.press(button);
        if press.changed {
            self.notifier.refresh(view);
        }
        Ok((button, press))
    }

    /// Push the current state to the display unconditionally
    pub fn refresh(&self) {
        let view = self.session.snapshot().view();
        self.notifier.refresh(view);
    }

    /// Turn LED color for the current state
    pub fn indicator(&self, palette: &Palette) -> Rgb {
        indicator_color(&self.session.snapshot(), palette)
    }
}
