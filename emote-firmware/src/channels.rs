//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use emote_core::assets::Emotion;
use emote_core::rotation::RotationCommand;

/// Channel capacity for rotation commands
const COMMAND_CHANNEL_SIZE: usize = 4;

/// Commands for the rotation task (button presses, future remote control)
pub static ROTATION_CMD: Channel<CriticalSectionRawMutex, RotationCommand, COMMAND_CHANNEL_SIZE> =
    Channel::new();

/// Emotion most recently put on the display (updated by rotation task)
pub static ACTIVE_EMOTION: Signal<CriticalSectionRawMutex, Emotion> = Signal::new();
