//! Chessclock - Dual-Player Chess Clock Firmware
//!
//! Main firmware binary for an RP2040 board with six keys, an SH1106
//! OLED, an RGB turn LED and a piezo buzzer.
//!
//! Board wiring:
//! - Keys (to ground): GPIO6 P1, GPIO7 -, GPIO8 Rst, GPIO9 Pause, GPIO10 +, GPIO11 P2
//! - OLED on I2C1: GPIO2 SDA, GPIO3 SCL
//! - Buzzer: GPIO15 (PWM slice 7 B)
//! - RGB LED: GPIO16 red, GPIO17 green (slice 0), GPIO18 blue (slice 1)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use chessclock_core::Button;
use chessclock_drivers::{BuzzerConfig, RgbLedConfig};

use crate::channels::{CONTROLLER, PRESSES};
use crate::config::CLOCK_CONFIG;
use crate::led::PwmTurnLed;
use crate::sh1106::Sh1106;

mod channels;
mod config;
mod led;
mod sh1106;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// OLED bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Chessclock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = CLOCK_CONFIG;
    info!(
        "Configuration: {}s per player, {}s steps, {} ms ticks",
        config.starting_seconds, config.step_seconds, config.tick_period_ms
    );

    // Keys, left to right as labelled on the legend
    let keys = [
        (Input::new(p.PIN_6, Pull::Up), Button::ClaimA),
        (Input::new(p.PIN_7, Pull::Up), Button::AdjustDown),
        (Input::new(p.PIN_8, Pull::Up), Button::Reset),
        (Input::new(p.PIN_9, Pull::Up), Button::PlayPause),
        (Input::new(p.PIN_10, Pull::Up), Button::AdjustUp),
        (Input::new(p.PIN_11, Pull::Up), Button::ClaimB),
    ];

    // OLED
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C1, p.PIN_3, p.PIN_2, Irqs, i2c_config);
    let oled = Sh1106::new(i2c);
    info!("I2C initialized for OLED");

    // Turn LED
    let led = PwmTurnLed::new(
        Pwm::new_output_ab(p.PWM_SLICE0, p.PIN_16, p.PIN_17, PwmConfig::default()),
        Pwm::new_output_a(p.PWM_SLICE1, p.PIN_18, PwmConfig::default()),
        RgbLedConfig::default(),
    );

    // Buzzer
    let buzzer = Pwm::new_output_b(p.PWM_SLICE7, p.PIN_15, PwmConfig::default());
    info!("PWM outputs initialized");

    // Spawn tasks
    for (pin, button) in keys {
        spawner.spawn(tasks::button_task(pin, button)).unwrap();
    }
    spawner.spawn(tasks::input_task()).unwrap();
    spawner
        .spawn(tasks::tick_task(Duration::from_millis(
            config.tick_period_ms as u64,
        )))
        .unwrap();
    spawner
        .spawn(tasks::indicator_task(
            led,
            Duration::from_millis(config.indicator_period_ms as u64),
            config.palette,
        ))
        .unwrap();
    spawner.spawn(tasks::display_task(oled)).unwrap();
    spawner
        .spawn(tasks::alarm_task(buzzer, BuzzerConfig::default()))
        .unwrap();

    // Show the configured time before the first key press
    CONTROLLER.refresh();

    info!("All tasks spawned, firmware running");

    loop {
        Timer::after_secs(60).await;
        trace!(
            "Main loop heartbeat, {} presses dropped",
            PRESSES.dropped()
        );
    }
}
