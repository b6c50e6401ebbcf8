//! Button task
//!
//! Short press toggles the rotation, holding for a second runs the demo.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use emote_core::rotation::RotationCommand;

use crate::channels::ROTATION_CMD;

/// Contact bounce settle time
const DEBOUNCE_MS: u64 = 50;

/// Hold time that turns a press into a long press
const LONG_PRESS_MS: u64 = 1000;

/// Button task - turns presses into rotation commands
///
/// The button pulls the pin low when pressed.
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;
        Timer::after_millis(DEBOUNCE_MS).await;
        if button.is_high() {
            continue;
        }

        let press = select(button.wait_for_high(), Timer::after_millis(LONG_PRESS_MS)).await;
        let command = match press {
            Either::First(()) => RotationCommand::Toggle,
            Either::Second(()) => {
                button.wait_for_high().await;
                RotationCommand::DemoAll
            }
        };

        // Release bounce
        Timer::after_millis(DEBOUNCE_MS).await;

        info!("Button: {:?}", command);
        ROTATION_CMD.send(command).await;
    }
}
