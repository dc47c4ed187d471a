//! Bounded press queue between the key tasks and the dispatcher
//!
//! Key tasks never wait on the dispatcher. When the queue is full the
//! newest press is rejected and counted; presses already queued keep
//! their order.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicU32, Ordering};

use crate::controller::InputError;

/// Presses held while the dispatcher is busy
pub const PRESS_QUEUE_DEPTH: usize = 10;

/// Raw button ids in arrival order
pub struct PressQueue<M: RawMutex, const N: usize> {
    channel: Channel<M, u8, N>,
    dropped: AtomicU32,
}

impl<M: RawMutex, const N: usize> Default for PressQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> PressQueue<M, N> {
    /// Empty queue; usable in a `static`
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Queue a raw button id without waiting
    pub fn push(&self, id: u8) -> Result<(), InputError> {
        self.channel.try_send(id).map_err(|_| {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            InputError::QueueFull(id)
        })
    }

    /// Wait for the oldest queued id
    pub async fn next(&self) -> u8 {
        self.channel.receive().await
    }

    /// Oldest queued id, if any
    pub fn try_next(&self) -> Option<u8> {
        self.channel.try_receive().ok()
    }

    /// Presses rejected since boot
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}
