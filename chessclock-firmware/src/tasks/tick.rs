//! Game clock ticker
//!
//! Charges one second to the active player per period while running.
//! `Ticker` keeps an absolute schedule, so a late wakeup does not push
//! later ticks back.

use defmt::*;
use embassy_time::{Duration, Ticker};

use chessclock_core::Tick;

use crate::channels::CONTROLLER;

/// Tick task - one game second per period
#[embassy_executor::task]
pub async fn tick_task(period: Duration) {
    info!("Tick task started ({} ms period)", period.as_millis());

    let mut ticker = Ticker::every(period);

    loop {
        ticker.next().await;

        match CONTROLLER.on_tick() {
            Tick::Idle => {}
            Tick::Counted(player) => trace!("Tick charged to {:?}", player),
            Tick::Expired(player) => info!("{:?} ran out of time", player),
        }
    }
}
