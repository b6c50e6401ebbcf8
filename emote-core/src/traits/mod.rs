//! Collaborator traits
//!
//! These traits define the interface between the rotation logic and the
//! host environment: the display toolkit, the timer facility and the
//! diagnostic log.

pub mod diagnostics;
pub mod display;
pub mod timer;

pub use diagnostics::{Diagnostic, Diagnostics, Operation, Severity};
#[cfg(feature = "defmt")]
pub use diagnostics::DefmtDiagnostics;
pub use display::DisplaySink;
pub use timer::{TimerError, TimerHandle, TimerHost};
