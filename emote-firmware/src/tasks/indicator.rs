//! Emotion indicator task
//!
//! Renders the shown emotion on the board LED: one blink per catalogue
//! position, so staticstate blinks once and buxue six times.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use crate::channels::ACTIVE_EMOTION;

const BLINK_ON_MS: u64 = 120;
const BLINK_OFF_MS: u64 = 180;

/// Indicator task - blinks the LED whenever the emotion changes
#[embassy_executor::task]
pub async fn indicator_task(mut led: Output<'static>) {
    info!("Indicator task started");

    loop {
        let emotion = ACTIVE_EMOTION.wait().await;
        info!("Showing {}", emotion.name());

        for _ in 0..=emotion.index() {
            led.set_high();
            Timer::after_millis(BLINK_ON_MS).await;
            led.set_low();
            Timer::after_millis(BLINK_OFF_MS).await;
        }
    }
}
