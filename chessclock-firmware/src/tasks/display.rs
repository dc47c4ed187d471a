//! Display worker
//!
//! Waits for snapshots from the controller and redraws the OLED. Only the
//! newest snapshot is drawn when several arrive while a flush is running.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;

use chessclock_core::{ClockDisplayExt, ClockView, DisplayError};
use chessclock_display::{ClockScreen, DisplayBackend};

use crate::channels::DISPLAY_REFRESH;
use crate::sh1106::Sh1106;

/// OLED on the board's I2C1 bus
pub type Oled = Sh1106<I2c<'static, I2C1, Async>>;

/// Display task - one redraw per received snapshot
#[embassy_executor::task]
pub async fn display_task(mut oled: Oled) {
    info!("Display task started");

    let mut clock = ClockScreen::new();

    loop {
        let view = DISPLAY_REFRESH.wait().await;

        if let Err(e) = draw(&mut clock, &mut oled, &view).await {
            warn!("Display update failed: {:?}", e);
            // The panel may hold a partial frame; repaint all of it next time
            clock.invalidate();
        }
    }
}

async fn draw(
    clock: &mut ClockScreen,
    oled: &mut Oled,
    view: &ClockView,
) -> Result<(), DisplayError> {
    if !oled.is_ready() {
        oled.init().await?;
    }

    clock.show(view)?;
    if clock.render(oled)? {
        oled.flush().await?;
    }
    Ok(())
}
