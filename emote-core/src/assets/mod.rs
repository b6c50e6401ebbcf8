//! Named image assets
//!
//! The registry maps human-readable names to opaque handles owned by the
//! display collaborator. The catalogue provides the built-in emotion set.

pub mod catalog;
pub mod registry;

pub use catalog::{builtin_registry, Emotion, CATALOG_VERSION, EMOTIONS};
pub use registry::{AssetError, AssetRegistry, NamedAsset};

use heapless::String;

/// Maximum length of an asset name
pub const MAX_NAME_LEN: usize = 16;

/// Bounded asset name used in configuration and commands
pub type AssetName = String<MAX_NAME_LEN>;

/// Build an [`AssetName`] from a string slice
///
/// Returns `None` if the name does not fit in [`MAX_NAME_LEN`] bytes.
pub fn asset_name(name: &str) -> Option<AssetName> {
    let mut buf = AssetName::new();
    buf.push_str(name).ok()?;
    Some(buf)
}
