//! Emote - Emotion Display Firmware
//!
//! Main firmware binary for RP2040 boards driving an emotion display.
//! Rotates through a configured sequence of emotions on a timer; a button
//! toggles the rotation (short press) or runs the demo list (long press).

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use emote_core::config::EmoteConfig;

mod channels;
mod config;
mod display;
mod tasks;
mod timer;

// Configuration must live forever for task references
static CONFIG: StaticCell<EmoteConfig> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Emote firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config: &'static EmoteConfig = CONFIG.init(config::load_embedded());

    // Pico board: user LED on GPIO25, push button from GPIO15 to GND
    let led = Output::new(p.PIN_25, Level::Low);
    let button = Input::new(p.PIN_15, Pull::Up);

    spawner.spawn(tasks::indicator_task(led)).unwrap();
    spawner.spawn(tasks::rotation_task(config)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();

    info!("All tasks spawned");
}
