//! Mutex-guarded session shared between tasks
//!
//! The ticker and the button dispatcher both read-modify-write the
//! session. Each operation here runs as one critical section over the
//! whole record, so a tick and a press landing together are serialized
//! and never observed half-applied. Notifications are sent by the caller
//! after the lock is released.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::state::{Button, ClockView, Press, SessionState, Tick};

/// Session record behind a blocking mutex
pub struct SharedSession<M: RawMutex> {
    inner: Mutex<M, RefCell<SessionState>>,
}

impl<M: RawMutex> SharedSession<M> {
    /// Wrap an initial session; usable in a `static`
    pub const fn new(state: SessionState) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(state)),
        }
    }

    /// Apply a button press atomically
    pub fn press(&self, button: Button) -> (Press, ClockView) {
        self.inner.lock(|cell| {
            let mut state = cell.borrow_mut();
            let press = state.press(button);
            (press, state.view())
        })
    }

    /// Run one ticker period atomically
    pub fn tick(&self) -> (Tick, ClockView) {
        self.inner.lock(|cell| {
            let mut state = cell.borrow_mut();
            let tick = state.tick();
            (tick, state.view())
        })
    }

    /// Consistent copy of the whole record
    pub fn snapshot(&self) -> SessionState {
        self.inner.lock(|cell| *cell.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockConfig;
    use crate::state::{Phase, Player};
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    fn config(starting_seconds: u32) -> ClockConfig {
        ClockConfig {
            starting_seconds,
            ..ClockConfig::new()
        }
    }

    #[test]
    fn test_press_and_tick_update_shared_record() {
        let session: SharedSession<NoopRawMutex> =
            SharedSession::new(SessionState::new(&config(3)));

        let (press, view) = session.press(Button::ClaimA);
        assert!(press.changed);
        assert_eq!(view.highlighted, Some(Player::A));

        let (tick, view) = session.tick();
        assert_eq!(tick, Tick::Counted(Player::A));
        assert_eq!(view.remaining(Player::A), 2);
        assert_eq!(session.snapshot().remaining(Player::A), 2);
    }

    #[test]
    fn test_view_matches_state_after_expiry() {
        let session: SharedSession<NoopRawMutex> =
            SharedSession::new(SessionState::new(&config(1)));
        session.press(Button::ClaimB);

        let (tick, view) = session.tick();
        assert_eq!(tick, Tick::Expired(Player::B));
        assert_eq!(view.highlighted, None);
        assert_eq!(view.remaining(Player::B), 0);
        assert_eq!(session.snapshot().phase(), Phase::Expired);
    }

    fn button_player(button: Button) -> Player {
        match button {
            Button::ClaimB => Player::B,
            _ => Player::A,
        }
    }

    /// Total time consumed so far, given the starting allotment
    fn consumed(state: &SessionState) -> u32 {
        2 * state.configured_seconds() - state.remaining(Player::A) - state.remaining(Player::B)
    }

    #[test]
    fn test_concurrent_ticks_and_claims_stay_paired() {
        const START: u32 = 5_000;
        const TICKS: u32 = 4_000;

        static SESSION: SharedSession<CriticalSectionRawMutex> =
            SharedSession::new(SessionState::new(&ClockConfig {
                starting_seconds: START,
                ..ClockConfig::new()
            }));
        static DONE: AtomicBool = AtomicBool::new(false);

        SESSION.press(Button::ClaimA);

        let ticker = thread::spawn(|| {
            let mut ticks = Vec::new();
            for _ in 0..TICKS {
                ticks.push(SESSION.tick().0);
            }
            DONE.store(true, Ordering::SeqCst);
            ticks
        });

        let claimer = thread::spawn(|| {
            let mut presses = 0u32;
            while !DONE.load(Ordering::SeqCst) {
                let button = if presses % 2 == 0 {
                    Button::ClaimB
                } else {
                    Button::ClaimA
                };
                let (press, view) = SESSION.press(button);
                // The view returned with a press is the state that press produced
                assert_eq!(view.highlighted, Some(button_player(button)));
                assert!(press.changed);
                presses += 1;
            }
            presses
        });

        let observer = thread::spawn(|| {
            let mut last_consumed = 0;
            while !DONE.load(Ordering::SeqCst) {
                let state = SESSION.snapshot();
                assert_eq!(state.phase(), Phase::Running);
                assert!(state.remaining(state.active_player()) > 0);
                // Time only ever moves forward by whole ticks
                let now = consumed(&state);
                assert!(now >= last_consumed);
                last_consumed = now;
            }
        });

        let ticks = ticker.join().unwrap();
        claimer.join().unwrap();
        observer.join().unwrap();

        let state = SESSION.snapshot();
        assert!(ticks.iter().all(|tick| matches!(tick, Tick::Counted(_))));
        assert_eq!(consumed(&state), TICKS);

        // Every tick was charged to exactly the player active at that instant
        let charged_a = ticks
            .iter()
            .filter(|tick| **tick == Tick::Counted(Player::A))
            .count() as u32;
        assert_eq!(START - state.remaining(Player::A), charged_a);
        assert_eq!(START - state.remaining(Player::B), TICKS - charged_a);
    }
}
