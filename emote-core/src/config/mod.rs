//! Configuration types
//!
//! Rotation and demo settings, parsed from the TOML file embedded in the
//! firmware image.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
