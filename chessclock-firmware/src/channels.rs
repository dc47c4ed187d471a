//! Inter-task communication channels
//!
//! Defines the shared session and the static channels used between
//! Embassy tasks. Uses embassy-sync primitives throughout.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use chessclock_core::{
    ClockNotifier, ClockView, Controller, PressQueue, SessionState, SharedSession,
    PRESS_QUEUE_DEPTH,
};

use crate::config::CLOCK_CONFIG;

/// The one session record, shared by the ticker and the dispatcher
pub static SESSION: SharedSession<CriticalSectionRawMutex> =
    SharedSession::new(SessionState::new(&CLOCK_CONFIG));

/// Raw button ids from the key tasks, consumed by the input task
pub static PRESSES: PressQueue<CriticalSectionRawMutex, PRESS_QUEUE_DEPTH> = PressQueue::new();

/// Latest snapshot to draw (unconsumed snapshots are replaced)
pub static DISPLAY_REFRESH: Signal<CriticalSectionRawMutex, ClockView> = Signal::new();

/// Timeout alarm request
pub static ALARM: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Routes controller notifications to the worker signals
pub struct SignalNotifier;

impl ClockNotifier for SignalNotifier {
    fn refresh(&self, view: ClockView) {
        DISPLAY_REFRESH.signal(view);
    }

    fn alarm(&self) {
        ALARM.signal(());
    }
}

/// Controller shared by the tick, input and indicator tasks
pub static CONTROLLER: Controller<'static, CriticalSectionRawMutex, SignalNotifier> =
    Controller::new(&SESSION, SignalNotifier);

/// Queue a raw button id without waiting
///
/// When the queue is full the new press is dropped and counted.
pub fn queue_press(id: u8) {
    if let Err(e) = PRESSES.push(id) {
        warn!("{:?} ({} dropped in total)", e, PRESSES.dropped());
    }
}
