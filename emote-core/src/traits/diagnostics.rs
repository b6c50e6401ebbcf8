//! Diagnostic reporting
//!
//! The rotation controller never returns failures to its caller. Instead
//! every notable outcome is reported here and the controller degrades
//! (fallback asset, skipped operation).

use super::timer::TimerError;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Controller operation named in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    Tick,
    SetByName,
}

/// Events reported by the rotation controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic<'n> {
    /// Display attached; initial asset shown
    DisplayReady { version: &'static str, count: usize },
    /// Timed rotation switched to a named asset
    Switched { name: &'n str },
    /// Timed rotation could not resolve a name and showed the fallback
    FallbackShown { name: &'n str },
    /// Manual override showed a named asset
    ManualSet { name: &'n str },
    /// Manual override named an unknown asset; display unchanged
    NotFound { name: &'n str },
    /// Display operation before a display was attached
    Uninitialized { operation: Operation },
    /// Timed rotation started
    RotationStarted { interval_ms: u32, len: usize },
    /// Timed rotation stopped
    RotationStopped,
    /// Timer host refused to create the rotation timer
    TimerUnavailable(TimerError),
    /// Start requested with no usable rotation sequence
    NoSequence,
    /// Demo run started
    DemoStarted { count: usize },
    /// Demo run showed every entry
    DemoFinished,
    /// Demo run cancelled before completion
    DemoCancelled,
}

impl Diagnostic<'_> {
    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::FallbackShown { .. }
            | Diagnostic::NotFound { .. }
            | Diagnostic::NoSequence => Severity::Warn,
            Diagnostic::Uninitialized { .. } | Diagnostic::TimerUnavailable(_) => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// Trait for the diagnostic sink
///
/// Reporting is best effort and must never fail the caller.
pub trait Diagnostics {
    /// Record a diagnostic event
    fn report(&mut self, diagnostic: &Diagnostic<'_>);
}

impl<T: Diagnostics + ?Sized> Diagnostics for &mut T {
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        (**self).report(diagnostic)
    }
}

/// Diagnostics sink forwarding to the defmt logger
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtDiagnostics;

#[cfg(feature = "defmt")]
impl Diagnostics for DefmtDiagnostics {
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        match diagnostic {
            Diagnostic::DisplayReady { version, count } => {
                defmt::info!("Emotion assets v{}: {} emotions available", version, count)
            }
            Diagnostic::Switched { name } => defmt::info!("Switched to emotion: {}", name),
            Diagnostic::FallbackShown { name } => {
                defmt::warn!("Emotion not found: {}, showing default", name)
            }
            Diagnostic::ManualSet { name } => defmt::info!("Emotion set manually: {}", name),
            Diagnostic::NotFound { name } => defmt::warn!("Emotion not found: {}", name),
            Diagnostic::Uninitialized { operation } => {
                defmt::error!("Display not initialized ({})", operation)
            }
            Diagnostic::RotationStarted { interval_ms, len } => {
                defmt::info!("Rotation started: {} emotions every {}ms", len, interval_ms)
            }
            Diagnostic::RotationStopped => defmt::info!("Rotation stopped"),
            Diagnostic::TimerUnavailable(e) => {
                defmt::error!("Rotation timer unavailable: {}", e)
            }
            Diagnostic::NoSequence => defmt::warn!("No rotation sequence, not starting"),
            Diagnostic::DemoStarted { count } => {
                defmt::info!("Demo started: {} emotions", count)
            }
            Diagnostic::DemoFinished => defmt::info!("Demo finished"),
            Diagnostic::DemoCancelled => defmt::info!("Demo cancelled"),
        }
    }
}
