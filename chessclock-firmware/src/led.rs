//! RGB turn LED on two PWM slices
//!
//! Red and green share one slice (outputs A/B), blue uses output A of a
//! second slice. Both slices run with the same `top`.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use chessclock_core::{Rgb, TurnLed};
use chessclock_drivers::{RgbLed, RgbLedConfig};

pub struct PwmTurnLed {
    red_green: Pwm<'static>,
    blue: Pwm<'static>,
    driver: RgbLed,
}

impl PwmTurnLed {
    /// Take both slices and switch the LED off
    pub fn new(red_green: Pwm<'static>, blue: Pwm<'static>, config: RgbLedConfig) -> Self {
        let mut led = Self {
            red_green,
            blue,
            driver: RgbLed::new(config),
        };
        led.apply();
        led
    }

    fn apply(&mut self) {
        let top = self.driver.config().pwm_top;
        let [r, g, b] = self.driver.compare_values();

        let mut config = PwmConfig::default();
        config.top = top;
        config.compare_a = r;
        config.compare_b = g;
        self.red_green.set_config(&config);

        let mut config = PwmConfig::default();
        config.top = top;
        config.compare_a = b;
        self.blue.set_config(&config);
    }
}

impl TurnLed for PwmTurnLed {
    fn set_color(&mut self, color: Rgb) {
        // Skip the peripheral writes when nothing moved
        if self.driver.update(color) {
            self.apply();
        }
    }
}
