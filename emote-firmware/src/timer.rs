//! Embassy-backed rotation timer
//!
//! Holds at most one periodic timer. The owning task awaits [`TickerTimer::fired`]
//! alongside its other events and hands the handle back to the controller.

use core::future::pending;

use defmt::*;
use embassy_time::{Duration, Ticker};

use emote_core::traits::{TimerError, TimerHandle, TimerHost};

/// Single-slot periodic timer built on [`Ticker`]
pub struct TickerTimer {
    active: Option<(TimerHandle, Ticker)>,
    next_id: u32,
}

impl TickerTimer {
    pub const fn new() -> Self {
        Self {
            active: None,
            next_id: 0,
        }
    }

    /// Wait for the active timer to fire
    ///
    /// Never completes while no timer exists.
    pub async fn fired(&mut self) -> TimerHandle {
        match self.active.as_mut() {
            Some((handle, ticker)) => {
                let handle = *handle;
                ticker.next().await;
                handle
            }
            None => pending().await,
        }
    }
}

impl TimerHost for TickerTimer {
    fn create(&mut self, interval_ms: u32) -> Result<TimerHandle, TimerError> {
        if interval_ms == 0 {
            return Err(TimerError::InvalidInterval);
        }
        if self.active.is_some() {
            return Err(TimerError::Exhausted);
        }

        self.next_id = self.next_id.wrapping_add(1);
        let handle = TimerHandle::new(self.next_id);
        let ticker = Ticker::every(Duration::from_millis(interval_ms as u64));
        self.active = Some((handle, ticker));
        debug!("Timer {} created, period {}ms", handle.id(), interval_ms);
        Ok(handle)
    }

    fn delete(&mut self, handle: TimerHandle) {
        if matches!(self.active, Some((active, _)) if active == handle) {
            self.active = None;
            debug!("Timer {} deleted", handle.id());
        }
    }
}
