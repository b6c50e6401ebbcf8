//! Built-in emotion catalogue
//!
//! Six animated emotions shipped with the display firmware. The `Emotion`
//! value is the handle the display collaborator uses to pick the decoded
//! animation; this crate never touches image data.

use super::registry::{AssetRegistry, NamedAsset};

/// Version of the emotion asset set
pub const CATALOG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Built-in emotion handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Emotion {
    /// Neutral resting face, also the default image
    #[default]
    StaticState,
    Happy,
    Sad,
    Anger,
    Scare,
    /// Refusing to learn
    Buxue,
}

impl Emotion {
    /// All emotions in catalogue order
    pub const ALL: [Emotion; 6] = [
        Emotion::StaticState,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Anger,
        Emotion::Scare,
        Emotion::Buxue,
    ];

    /// Registry name of this emotion
    pub const fn name(self) -> &'static str {
        match self {
            Emotion::StaticState => "staticstate",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Anger => "anger",
            Emotion::Scare => "scare",
            Emotion::Buxue => "buxue",
        }
    }

    /// Position in the catalogue (0-based)
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Catalogue table backing [`builtin_registry`]
pub static EMOTIONS: [NamedAsset<Emotion>; 6] = [
    NamedAsset::new(Emotion::StaticState.name(), Emotion::StaticState),
    NamedAsset::new(Emotion::Happy.name(), Emotion::Happy),
    NamedAsset::new(Emotion::Sad.name(), Emotion::Sad),
    NamedAsset::new(Emotion::Anger.name(), Emotion::Anger),
    NamedAsset::new(Emotion::Scare.name(), Emotion::Scare),
    NamedAsset::new(Emotion::Buxue.name(), Emotion::Buxue),
];

/// Registry over the built-in emotion catalogue
pub fn builtin_registry() -> AssetRegistry<'static, Emotion> {
    AssetRegistry::new_unchecked(&EMOTIONS, CATALOG_VERSION)
}
