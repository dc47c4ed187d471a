//! Turn indicator
//!
//! Samples the session at a fixed rate and shows the active player's
//! color, or nothing, on the RGB LED.

use defmt::*;
use embassy_time::{Duration, Ticker};

use chessclock_core::{Palette, TurnLed};

use crate::channels::CONTROLLER;
use crate::led::PwmTurnLed;

/// Indicator task - follows the running player
#[embassy_executor::task]
pub async fn indicator_task(mut led: PwmTurnLed, period: Duration, palette: Palette) {
    info!("Indicator task started");

    let mut ticker = Ticker::every(period);

    loop {
        led.set_color(CONTROLLER.indicator(&palette));
        ticker.next().await;
    }
}
