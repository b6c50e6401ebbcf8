//! Board-agnostic core logic for the emotion display firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Emotion catalogue and the name to asset handle registry
//! - Rotation controller (timed cycling, manual override, demo runs)
//! - Collaborator traits (display sink, timer host, diagnostics)
//! - Configuration types and the embedded TOML parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod assets;
pub mod config;
pub mod rotation;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
