//! Key watchers
//!
//! One task per key. Keys are wired to ground with the internal pull-up,
//! so a press is a falling edge. Each confirmed press is queued as its
//! raw id and the task waits for release before arming again.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use chessclock_core::Button;

use crate::channels::queue_press;

/// Time for contacts to settle after an edge
const DEBOUNCE: Duration = Duration::from_millis(20);

/// Button task - one instance per key
#[embassy_executor::task(pool_size = 6)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Watching {:?} key", button);

    loop {
        pin.wait_for_falling_edge().await;
        Timer::after(DEBOUNCE).await;

        if pin.is_low() {
            queue_press(button.id());

            pin.wait_for_rising_edge().await;
            Timer::after(DEBOUNCE).await;
        }
    }
}
