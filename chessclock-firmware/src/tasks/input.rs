//! Button dispatcher
//!
//! Drains the button queue in arrival order and applies each press to
//! the session.

use defmt::*;

use crate::channels::{CONTROLLER, PRESSES};

/// Input task - applies queued presses one at a time
#[embassy_executor::task]
pub async fn input_task() {
    info!("Input task started");

    loop {
        let raw = PRESSES.next().await;

        match CONTROLLER.on_button(raw) {
            Ok((button, press)) if press.action.is_ignore() => {
                warn!("{:?} ignored in this phase", button);
            }
            Ok((button, press)) if press.changed => {
                debug!("{:?} -> {:?}", button, press.action);
            }
            Ok((button, press)) => {
                debug!("{:?} -> {:?} (no change)", button, press.action);
            }
            Err(e) => warn!("Dropping input: {:?}", e),
        }
    }
}
