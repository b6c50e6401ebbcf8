//! Asset registry
//!
//! A read-only table of named asset handles. Lookup is an exact,
//! case-sensitive match; a miss is an expected outcome, not a fault.

/// Errors reported by the asset registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// No asset is registered under the requested name
    NotFound,
    /// Registry table has no entries
    Empty,
    /// An entry has an empty name
    EmptyName,
    /// Two entries share the same name
    DuplicateName,
}

/// A registry entry: a unique name and the handle it resolves to
///
/// The handle is a non-owning reference into the display collaborator's
/// asset storage, so it is expected to be `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NamedAsset<H> {
    /// Lookup key
    pub name: &'static str,
    /// Opaque asset handle
    pub handle: H,
}

impl<H> NamedAsset<H> {
    /// Create a registry entry
    pub const fn new(name: &'static str, handle: H) -> Self {
        Self { name, handle }
    }
}

/// Name to handle registry
///
/// Populated once from a static table and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct AssetRegistry<'a, H> {
    assets: &'a [NamedAsset<H>],
    version: &'static str,
}

impl<'a, H: Copy> AssetRegistry<'a, H> {
    /// Create a registry from a table of assets
    ///
    /// Rejects an empty table, empty names and duplicate names.
    pub fn new(assets: &'a [NamedAsset<H>], version: &'static str) -> Result<Self, AssetError> {
        if assets.is_empty() {
            return Err(AssetError::Empty);
        }

        for (i, asset) in assets.iter().enumerate() {
            if asset.name.is_empty() {
                return Err(AssetError::EmptyName);
            }
            if assets[..i].iter().any(|other| other.name == asset.name) {
                return Err(AssetError::DuplicateName);
            }
        }

        Ok(Self { assets, version })
    }

    /// Create a registry without validating the table
    ///
    /// Only for tables whose names are known to be unique at compile time,
    /// such as the built-in catalogue.
    pub const fn new_unchecked(assets: &'a [NamedAsset<H>], version: &'static str) -> Self {
        Self { assets, version }
    }

    /// Resolve a name to its handle
    pub fn lookup(&self, name: &str) -> Result<H, AssetError> {
        self.assets
            .iter()
            .find(|asset| asset.name == name)
            .map(|asset| asset.handle)
            .ok_or(AssetError::NotFound)
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }

    /// Number of registered assets
    pub fn count(&self) -> usize {
        self.assets.len()
    }

    /// Build/version identifier of the asset set
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Registered names in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + 'a {
        self.assets.iter().map(|asset| asset.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    static TABLE: [NamedAsset<u8>; 3] = [
        NamedAsset::new("a", 1),
        NamedAsset::new("b", 2),
        NamedAsset::new("default", 0),
    ];

    #[test]
    fn test_lookup_registered() {
        let registry = AssetRegistry::new(&TABLE, "1.0").unwrap();
        assert_eq!(registry.lookup("a"), Ok(1));
        assert_eq!(registry.lookup("b"), Ok(2));
        assert_eq!(registry.lookup("default"), Ok(0));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let registry = AssetRegistry::new(&TABLE, "1.0").unwrap();
        assert_eq!(registry.lookup("A"), Err(AssetError::NotFound));
        assert_eq!(registry.lookup("defaul"), Err(AssetError::NotFound));
        assert_eq!(registry.lookup(" a"), Err(AssetError::NotFound));
        assert_eq!(registry.lookup(""), Err(AssetError::NotFound));
    }

    #[test]
    fn test_count_and_version() {
        let registry = AssetRegistry::new(&TABLE, "v2.1.0").unwrap();
        assert_eq!(registry.count(), 3);
        assert_eq!(registry.version(), "v2.1.0");
        assert!(registry.contains("b"));
        assert!(!registry.contains("c"));
    }

    #[test]
    fn test_names_in_table_order() {
        let registry = AssetRegistry::new(&TABLE, "1.0").unwrap();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["a", "b", "default"]);
    }

    #[test]
    fn test_rejects_bad_tables() {
        let empty: [NamedAsset<u8>; 0] = [];
        assert_eq!(
            AssetRegistry::new(&empty, "1.0").unwrap_err(),
            AssetError::Empty
        );

        let unnamed = [NamedAsset::new("a", 1), NamedAsset::new("", 2)];
        assert_eq!(
            AssetRegistry::new(&unnamed, "1.0").unwrap_err(),
            AssetError::EmptyName
        );

        let duplicate = [
            NamedAsset::new("a", 1),
            NamedAsset::new("b", 2),
            NamedAsset::new("a", 3),
        ];
        assert_eq!(
            AssetRegistry::new(&duplicate, "1.0").unwrap_err(),
            AssetError::DuplicateName
        );
    }

    proptest! {
        #[test]
        fn prop_lookup_is_idempotent(index in 0usize..3, repeats in 1usize..16) {
            let registry = AssetRegistry::new(&TABLE, "1.0").unwrap();
            let name = TABLE[index].name;
            let first = registry.lookup(name);
            for _ in 0..repeats {
                prop_assert_eq!(registry.lookup(name), first);
            }
            prop_assert_eq!(first, Ok(TABLE[index].handle));
        }

        #[test]
        fn prop_unregistered_names_not_found(name in "\\PC{0,24}") {
            prop_assume!(!TABLE.iter().any(|asset| asset.name == name));
            let registry = AssetRegistry::new(&TABLE, "1.0").unwrap();
            prop_assert_eq!(registry.lookup(&name), Err(AssetError::NotFound));
        }
    }
}
