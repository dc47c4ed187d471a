//! RGB LED driver with PWM brightness control
//!
//! Each color channel is driven by one PWM output. The driver keeps the
//! last applied color and only reports a change when the compare values
//! actually move, so the firmware can skip redundant peripheral writes
//! from the 10 Hz indicator loop.
//!
//! ```ignore
//! let mut led = RgbLed::new(RgbLedConfig::default());
//! if led.update(Rgb::new(100, 0, 0)) {
//!     let [r, g, b] = led.compare_values();
//!     // write r/g/b into the PWM slice configs
//! }
//! ```

use chessclock_core::Rgb;

/// RGB LED driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbLedConfig {
    /// PWM top value shared by all three channels
    pub pwm_top: u16,
    /// Common-anode LEDs light when the pin is low
    pub common_anode: bool,
}

impl Default for RgbLedConfig {
    fn default() -> Self {
        Self {
            pwm_top: 1000,
            common_anode: false,
        }
    }
}

/// RGB LED driver state
pub struct RgbLed {
    config: RgbLedConfig,
    compare: [u16; 3],
}

impl RgbLed {
    /// Create a new driver with the LED off
    pub fn new(config: RgbLedConfig) -> Self {
        let mut led = Self {
            config,
            compare: [0; 3],
        };
        led.compare = led.compare_for(Rgb::OFF);
        led
    }

    /// Get the configuration
    pub fn config(&self) -> &RgbLedConfig {
        &self.config
    }

    /// Compare values for the red, green and blue outputs
    pub fn compare_values(&self) -> [u16; 3] {
        self.compare
    }

    /// Request a color
    ///
    /// Returns true if the compare values changed and must be written.
    pub fn update(&mut self, color: Rgb) -> bool {
        let compare = self.compare_for(color);
        if compare == self.compare {
            return false;
        }
        self.compare = compare;
        true
    }

    fn compare_for(&self, color: Rgb) -> [u16; 3] {
        [
            self.scale(color.r),
            self.scale(color.g),
            self.scale(color.b),
        ]
    }

    /// Map 0-255 onto 0-top, inverted for common-anode wiring
    fn scale(&self, value: u8) -> u16 {
        let top = self.config.pwm_top as u32;
        let on = (value as u32 * top / 255) as u16;
        if self.config.common_anode {
            self.config.pwm_top - on
        } else {
            on
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_off() {
        let led = RgbLed::new(RgbLedConfig::default());
        assert_eq!(led.compare_values(), [0, 0, 0]);
    }

    #[test]
    fn test_common_anode_off_is_full_compare() {
        let led = RgbLed::new(RgbLedConfig {
            pwm_top: 1000,
            common_anode: true,
        });
        assert_eq!(led.compare_values(), [1000, 1000, 1000]);
    }

    #[test]
    fn test_linear_scaling() {
        let mut led = RgbLed::new(RgbLedConfig::default());
        assert!(led.update(Rgb::new(255, 0, 51)));
        assert_eq!(led.compare_values(), [1000, 0, 200]);
    }

    #[test]
    fn test_common_anode_inverts() {
        let mut led = RgbLed::new(RgbLedConfig {
            pwm_top: 255,
            common_anode: true,
        });
        led.update(Rgb::new(100, 0, 255));
        assert_eq!(led.compare_values(), [155, 255, 0]);
    }

    #[test]
    fn test_repeated_color_is_not_a_change() {
        let mut led = RgbLed::new(RgbLedConfig::default());
        assert!(led.update(Rgb::new(100, 0, 0)));
        assert!(!led.update(Rgb::new(100, 0, 0)));
        assert!(led.update(Rgb::OFF));
        assert!(!led.update(Rgb::OFF));
    }

    proptest! {
        #[test]
        fn prop_compare_within_top_and_mirrored(
            top in 1u16..=u16::MAX,
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
        ) {
            let color = Rgb::new(r, g, b);
            let mut cathode = RgbLed::new(RgbLedConfig { pwm_top: top, common_anode: false });
            let mut anode = RgbLed::new(RgbLedConfig { pwm_top: top, common_anode: true });
            cathode.update(color);
            anode.update(color);

            for (on, inverted) in cathode.compare_values().iter().zip(anode.compare_values()) {
                prop_assert!(*on <= top);
                prop_assert_eq!(*on + inverted, top);
            }
        }
    }
}
