//! Rotation sequence and name resolution

use crate::assets::{AssetName, AssetRegistry};

/// Errors when building a rotation sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// Sequence has no names
    Empty,
}

/// Ordered, non-empty list of asset names to rotate through
///
/// Borrowed from configuration. Names are not required to resolve in the
/// registry; an unresolved name shows the fallback asset when reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSequence<'a> {
    names: &'a [AssetName],
}

impl<'a> RotationSequence<'a> {
    /// Create a sequence over `names`
    pub fn new(names: &'a [AssetName]) -> Result<Self, SequenceError> {
        if names.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { names })
    }

    /// Number of names in the sequence (always at least one)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at `index`
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.names.get(index).map(|name| name.as_str())
    }

    /// Names in rotation order
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.names.iter().map(|name| name.as_str())
    }
}

/// Result of resolving a name for timed rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution<H> {
    /// Name found in the registry
    Resolved(H),
    /// Name missing; fallback handle substituted
    Fallback(H),
}

impl<H: Copy> Resolution<H> {
    /// Handle to display
    pub fn handle(&self) -> H {
        match self {
            Resolution::Resolved(handle) | Resolution::Fallback(handle) => *handle,
        }
    }

    /// Check if the fallback was substituted
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// Resolve `name` against `registry`, substituting `fallback` on a miss
///
/// Pure: no logging, no display side effects.
pub fn resolve<H: Copy>(registry: &AssetRegistry<'_, H>, name: &str, fallback: H) -> Resolution<H> {
    match registry.lookup(name) {
        Ok(handle) => Resolution::Resolved(handle),
        Err(_) => Resolution::Fallback(fallback),
    }
}
