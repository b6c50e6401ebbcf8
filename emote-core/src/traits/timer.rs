//! Timer host trait

/// Errors that can occur when creating a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// No timer slot available
    Exhausted,
    /// Interval must be non-zero
    InvalidInterval,
}

/// Identifier of a periodic timer created by a [`TimerHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerHandle(u32);

impl TimerHandle {
    /// Wrap a host-specific timer id
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Host-specific timer id
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Trait for the periodic timer facility
///
/// The host calls back into the rotation controller with the handle of the
/// timer that fired. A deleted timer must not fire again, but callers still
/// tolerate a late callback carrying a stale handle.
pub trait TimerHost {
    /// Create a periodic timer firing every `interval_ms` milliseconds
    fn create(&mut self, interval_ms: u32) -> Result<TimerHandle, TimerError>;

    /// Delete a timer; unknown handles are ignored
    fn delete(&mut self, handle: TimerHandle);
}
