//! Timed asset rotation
//!
//! The controller cycles the displayed asset through a fixed sequence of
//! names on each timer tick, and accepts out-of-band overrides and demo
//! runs. Name resolution is a pure function so it can be tested apart from
//! the timer and display wiring.

pub mod command;
pub mod controller;
pub mod demo;
pub mod sequence;
pub mod state;

pub use command::{CommandSettings, RotationCommand};
pub use controller::{Outcome, RotationController, RotationError};
pub use demo::{DemoRun, DemoStep};
pub use sequence::{resolve, Resolution, RotationSequence, SequenceError};
pub use state::{ActiveRotation, RotationPhase, RotationState};
