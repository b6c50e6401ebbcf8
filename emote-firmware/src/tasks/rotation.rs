//! Rotation task
//!
//! Owns the rotation controller. Commands from other tasks, rotation timer
//! fires and demo steps are all handled here, so the controller is only
//! ever touched from this loop.

use core::future::pending;

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Instant, Timer};

use emote_core::assets::{builtin_registry, Emotion};
use emote_core::config::EmoteConfig;
use emote_core::rotation::{CommandSettings, DemoRun, DemoStep, RotationCommand, RotationController};
use emote_core::traits::DefmtDiagnostics;

use crate::channels::{ACTIVE_EMOTION, ROTATION_CMD};
use crate::display::SignalDisplay;
use crate::timer::TickerTimer;

type Controller =
    RotationController<'static, Emotion, SignalDisplay, TickerTimer, DefmtDiagnostics>;

/// Rotation task - owns the controller and its timer
#[embassy_executor::task]
pub async fn rotation_task(config: &'static EmoteConfig) {
    info!("Rotation task started");

    let registry = builtin_registry();
    for name in config.unresolved(&registry) {
        warn!("Configured emotion not in catalogue: {}", name);
    }

    let fallback = match registry.lookup(&config.rotation.fallback) {
        Ok(emotion) => emotion,
        Err(_) => {
            let emotion = Emotion::default();
            warn!("Fallback unavailable, using {}", emotion.name());
            emotion
        }
    };

    let mut controller: Controller =
        RotationController::new(registry, fallback, TickerTimer::new(), DefmtDiagnostics);
    controller.attach_display(SignalDisplay::new(&ACTIVE_EMOTION));

    let settings = CommandSettings::from_config(config);
    let mut demo: Option<DemoRun<'static>> = None;
    let mut demo_due: Option<Instant> = None;

    if config.rotation.autostart {
        controller.apply(RotationCommand::Start, &settings, &mut demo);
    } else {
        info!("Autostart disabled, waiting for a command");
    }

    loop {
        let due = demo_due;

        let event = select3(
            ROTATION_CMD.receive(),
            controller.timer_mut().fired(),
            async move {
                match due {
                    Some(at) => Timer::at(at).await,
                    None => pending().await,
                }
            },
        )
        .await;

        let step = match event {
            Either3::First(command) => {
                debug!("Command: {:?}", command);
                controller.apply(command, &settings, &mut demo)
            }
            Either3::Second(handle) => {
                controller.on_timer(handle);
                None
            }
            Either3::Third(()) => controller.advance_demo(&mut demo),
        };

        demo_due = match step {
            Some(DemoStep::Showing { delay_ms, .. }) => {
                Some(Instant::now() + Duration::from_millis(delay_ms as u64))
            }
            // Stop, cancel or a finished run clears the pending demo
            _ if demo.is_none() => None,
            _ => demo_due,
        };
    }
}
