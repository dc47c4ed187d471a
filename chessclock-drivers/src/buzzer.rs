//! Alarm buzzer driver
//!
//! A passive piezo on a PWM output. A tone is a square wave at 50% duty;
//! the driver converts tone frequencies into the PWM `top`/`compare`
//! pair for the configured system clock and divider.

/// A single step of a buzzer pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Frequency in Hz, 0 for silence
    pub freq_hz: u32,
    /// How long to hold this step
    pub duration_ms: u32,
}

impl Tone {
    pub const fn new(freq_hz: u32, duration_ms: u32) -> Self {
        Self {
            freq_hz,
            duration_ms,
        }
    }

    /// Silent step
    pub const fn rest(duration_ms: u32) -> Self {
        Self::new(0, duration_ms)
    }
}

/// Flag-fall alarm: three short beeps and a long one
pub const ALARM_PATTERN: &[Tone] = &[
    Tone::new(2_000, 150),
    Tone::rest(100),
    Tone::new(2_000, 150),
    Tone::rest(100),
    Tone::new(2_000, 150),
    Tone::rest(300),
    Tone::new(1_500, 800),
    Tone::rest(50),
];

/// Buzzer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerError {
    /// Frequency cannot be produced with a 16-bit counter
    FrequencyOutOfRange(u32),
}

/// PWM slice configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmSetting {
    /// Counter wrap value
    pub top: u16,
    /// Output compare (0 = silent)
    pub compare: u16,
}

impl PwmSetting {
    /// Output held low
    pub const SILENT: PwmSetting = PwmSetting {
        top: u16::MAX,
        compare: 0,
    };

    pub fn is_silent(&self) -> bool {
        self.compare == 0
    }
}

/// One step ready to apply to the PWM peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub setting: PwmSetting,
    pub duration_ms: u32,
}

/// Buzzer clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuzzerConfig {
    /// PWM input clock (RP2040 system clock)
    pub clock_hz: u32,
    /// Integer clock divider applied before the counter
    pub divider: u8,
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            clock_hz: 125_000_000,
            divider: 64,
        }
    }
}

impl BuzzerConfig {
    /// PWM setting producing `freq_hz` at 50% duty
    pub fn setting(&self, freq_hz: u32) -> Result<PwmSetting, BuzzerError> {
        if freq_hz == 0 {
            return Ok(PwmSetting::SILENT);
        }

        let divided = self.clock_hz / self.divider.max(1) as u32;
        let period = divided / freq_hz;
        if !(2..=u16::MAX as u32 + 1).contains(&period) {
            return Err(BuzzerError::FrequencyOutOfRange(freq_hz));
        }

        let top = (period - 1) as u16;
        Ok(PwmSetting {
            top,
            compare: (period / 2) as u16,
        })
    }

    /// Resolve a whole pattern into PWM steps
    pub fn plan<'a>(
        &'a self,
        pattern: &'a [Tone],
    ) -> impl Iterator<Item = Result<Step, BuzzerError>> + 'a {
        pattern.iter().map(move |tone| {
            self.setting(tone.freq_hz).map(|setting| Step {
                setting,
                duration_ms: tone.duration_ms,
            })
        })
    }

    /// Frequency actually produced by a setting (for diagnostics)
    pub fn frequency(&self, setting: &PwmSetting) -> u32 {
        if setting.is_silent() {
            return 0;
        }
        let divided = self.clock_hz / self.divider.max(1) as u32;
        divided / (setting.top as u32 + 1)
    }
}
