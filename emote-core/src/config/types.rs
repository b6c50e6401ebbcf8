//! Configuration type definitions
//!
//! These types represent the display configuration. Defaults reproduce the
//! stock behavior: rotate through all six emotions every three seconds,
//! falling back to the resting face.

use heapless::Vec;

use crate::assets::{asset_name, AssetName, AssetRegistry, Emotion};
use crate::rotation::{RotationSequence, SequenceError};

/// Maximum names in the rotation sequence or demo list
pub const MAX_SEQUENCE_LEN: usize = 12;

/// Default rotation interval
pub const DEFAULT_INTERVAL_MS: u32 = 3000;

/// Default delay between demo entries
pub const DEFAULT_DEMO_STEP_MS: u32 = 2000;

/// Bounded list of asset names
pub type NameList = Vec<AssetName, MAX_SEQUENCE_LEN>;

/// Timed rotation settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationConfig {
    /// Time each emotion stays on screen
    pub interval_ms: u32,
    /// Asset shown at startup and for unresolved sequence names
    pub fallback: AssetName,
    /// Names to rotate through, in order
    pub sequence: NameList,
    /// Start rotating at boot
    pub autostart: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            fallback: asset_name(Emotion::default().name()).unwrap_or_default(),
            sequence: catalog_names(),
            autostart: true,
        }
    }
}

impl RotationConfig {
    /// Rotation sequence over the configured names
    pub fn rotation_sequence(&self) -> Result<RotationSequence<'_>, SequenceError> {
        RotationSequence::new(&self.sequence)
    }
}

/// Demo run settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoConfig {
    /// Delay between demo entries
    pub step_ms: u32,
    /// Names shown by a demo run, in order
    pub emotions: NameList,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            step_ms: DEFAULT_DEMO_STEP_MS,
            emotions: catalog_names(),
        }
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmoteConfig {
    pub rotation: RotationConfig,
    pub demo: DemoConfig,
}

impl EmoteConfig {
    /// Configured names that do not resolve in `registry`
    ///
    /// Covers the fallback, the rotation sequence and the demo list. These
    /// are tolerated at runtime but worth a warning at boot.
    pub fn unresolved<'c, H: Copy + 'c>(
        &'c self,
        registry: &'c AssetRegistry<'c, H>,
    ) -> impl Iterator<Item = &'c str> + 'c {
        core::iter::once(&self.rotation.fallback)
            .chain(self.rotation.sequence.iter())
            .chain(self.demo.emotions.iter())
            .map(|name| name.as_str())
            .filter(move |name| !registry.contains(name))
    }
}

/// Names of every catalogue emotion, in catalogue order
pub fn catalog_names() -> NameList {
    Emotion::ALL
        .iter()
        .filter_map(|emotion| asset_name(emotion.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::builtin_registry;

    #[test]
    fn test_defaults_match_stock_behavior() {
        let config = EmoteConfig::default();
        assert_eq!(config.rotation.interval_ms, 3000);
        assert_eq!(config.rotation.fallback.as_str(), "staticstate");
        assert!(config.rotation.autostart);
        assert_eq!(config.demo.step_ms, 2000);

        let sequence: std::vec::Vec<_> = config.rotation.sequence.iter().map(|n| n.as_str()).collect();
        assert_eq!(sequence, ["staticstate", "happy", "sad", "anger", "scare", "buxue"]);
        assert_eq!(config.demo.emotions, config.rotation.sequence);
    }

    #[test]
    fn test_default_config_fully_resolves() {
        let config = EmoteConfig::default();
        let registry = builtin_registry();
        assert_eq!(config.unresolved(&registry).count(), 0);
        assert_eq!(config.rotation.rotation_sequence().unwrap().len(), 6);
    }

    #[test]
    fn test_unresolved_names_reported() {
        let mut config = EmoteConfig::default();
        config.rotation.fallback = asset_name("blank").unwrap();
        let _ = config.rotation.sequence.push(asset_name("wink").unwrap());
        let _ = config.demo.emotions.push(asset_name("Happy").unwrap());

        let registry = builtin_registry();
        let missing: std::vec::Vec<_> = config.unresolved(&registry).collect();
        assert_eq!(missing, ["blank", "wink", "Happy"]);
    }

    #[test]
    fn test_empty_sequence_has_no_rotation() {
        let mut config = RotationConfig::default();
        config.sequence.clear();
        assert_eq!(config.rotation_sequence(), Err(SequenceError::Empty));
    }
}
