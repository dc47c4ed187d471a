//! Timeout alarm
//!
//! Plays the alarm pattern on the buzzer once per request.

use defmt::*;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;

use chessclock_drivers::{BuzzerConfig, PwmSetting, ALARM_PATTERN};

use crate::channels::ALARM;

/// Alarm task - waits for a timeout and sounds the buzzer
#[embassy_executor::task]
pub async fn alarm_task(mut pwm: Pwm<'static>, config: BuzzerConfig) {
    info!("Alarm task started");

    apply(&mut pwm, &config, PwmSetting::SILENT);

    loop {
        ALARM.wait().await;
        info!("Sounding alarm");

        for step in config.plan(ALARM_PATTERN) {
            match step {
                Ok(step) => {
                    trace!(
                        "Buzzer at {} Hz for {} ms",
                        config.frequency(&step.setting),
                        step.duration_ms
                    );
                    apply(&mut pwm, &config, step.setting);
                    Timer::after_millis(step.duration_ms as u64).await;
                }
                Err(e) => warn!("Skipping alarm step: {:?}", e),
            }
        }

        apply(&mut pwm, &config, PwmSetting::SILENT);
    }
}

/// Write one tone to the buzzer's PWM slice (output B)
fn apply(pwm: &mut Pwm<'static>, config: &BuzzerConfig, setting: PwmSetting) {
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = config.divider.into();
    pwm_config.top = setting.top;
    pwm_config.compare_b = setting.compare;
    pwm.set_config(&pwm_config);
}
