//! Display sink publishing to the indicator
//!
//! The board has no panel of its own, so the shown emotion is published on
//! a signal and rendered by whichever task listens to it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use emote_core::assets::Emotion;
use emote_core::traits::DisplaySink;

/// Display sink that signals each shown emotion
pub struct SignalDisplay {
    target: &'static Signal<CriticalSectionRawMutex, Emotion>,
}

impl SignalDisplay {
    pub const fn new(target: &'static Signal<CriticalSectionRawMutex, Emotion>) -> Self {
        Self { target }
    }
}

impl DisplaySink<Emotion> for SignalDisplay {
    fn show(&mut self, emotion: Emotion) {
        self.target.signal(emotion);
    }
}
