//! Host collaborator seams.
//!
//! The engine owns the biome registry and the biome dictionary. This module
//! describes the slice of each that the registration driver needs, plus
//! in-memory implementations for embedding applications and tests.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use bopcompat_core::error::Result;
use bopcompat_core::{BiomeId, CompatError, Label};

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Read access to the host's biome registry.
pub trait BiomeRegistry {
    /// Whether the content pack owning `namespace` is installed.
    fn is_pack_loaded(&self, namespace: &str) -> bool;

    /// Every biome id currently registered.
    ///
    /// # Errors
    /// Returns `CompatError::RegistryUnavailable` if the registry cannot be
    /// queried yet (e.g. the server has not started).
    fn biome_ids(&self) -> Result<Vec<BiomeId>>;
}

/// Write access to the host's biome classification dictionary.
pub trait BiomeDictionary {
    /// Attach `labels` to `id`. Labels accumulate across calls.
    ///
    /// # Errors
    /// Returns `CompatError::Dictionary` if the host rejects the write.
    fn add_labels(&mut self, id: &BiomeId, labels: &BTreeSet<Label>) -> Result<()>;

    /// Labels currently attached to `id`.
    fn labels_of(&self, id: &BiomeId) -> BTreeSet<Label>;
}

// ---------------------------------------------------------------------------
// RegistrySnapshot
// ---------------------------------------------------------------------------

/// A point-in-time copy of the host registry.
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    loaded_packs: BTreeSet<String>,
    biomes: Option<Vec<BiomeId>>,
}

impl RegistrySnapshot {
    /// A snapshot holding `biomes`; every namespace seen counts as loaded.
    #[must_use]
    pub fn new(biomes: impl IntoIterator<Item = BiomeId>) -> Self {
        let biomes: Vec<BiomeId> = biomes.into_iter().collect();
        let loaded_packs = biomes.iter().map(|id| id.namespace().to_string()).collect();
        Self {
            loaded_packs,
            biomes: Some(biomes),
        }
    }

    /// Parse every entry of `raw` as a biome id.
    ///
    /// # Errors
    /// Returns `CompatError::InvalidBiomeId` on the first malformed entry.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let biomes = raw
            .iter()
            .map(|s| BiomeId::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(biomes))
    }

    /// A registry that cannot be queried yet, with `packs` reported as loaded.
    #[must_use]
    pub fn unavailable<S: Into<String>>(packs: impl IntoIterator<Item = S>) -> Self {
        Self {
            loaded_packs: packs.into_iter().map(Into::into).collect(),
            biomes: None,
        }
    }

    /// Mark `namespace` as loaded even if it registered no biomes.
    #[must_use]
    pub fn with_pack(mut self, namespace: impl Into<String>) -> Self {
        self.loaded_packs.insert(namespace.into());
        self
    }

    /// Register a biome after the snapshot was taken. Makes the registry
    /// available if it was not.
    pub fn register(&mut self, id: BiomeId) {
        self.loaded_packs.insert(id.namespace().to_string());
        self.biomes.get_or_insert_with(Vec::new).push(id);
    }

    /// Whether `biome_ids` will succeed.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.biomes.is_some()
    }
}

impl BiomeRegistry for RegistrySnapshot {
    fn is_pack_loaded(&self, namespace: &str) -> bool {
        self.loaded_packs.contains(namespace)
    }

    fn biome_ids(&self) -> Result<Vec<BiomeId>> {
        self.biomes
            .clone()
            .ok_or_else(|| CompatError::RegistryUnavailable("server not available".to_string()))
    }
}

// ---------------------------------------------------------------------------
// InMemoryDictionary
// ---------------------------------------------------------------------------

/// Biome dictionary kept in a map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDictionary {
    entries: BTreeMap<BiomeId, BTreeSet<Label>>,
    rejected: HashSet<BiomeId>,
    writes: usize,
}

impl InMemoryDictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every future write for `id` fail.
    pub fn reject(&mut self, id: BiomeId) {
        self.rejected.insert(id);
    }

    /// Number of successful `add_labels` calls.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Every labeled biome.
    pub fn iter(&self) -> impl Iterator<Item = (&BiomeId, &BTreeSet<Label>)> {
        self.entries.iter()
    }

    /// Number of labeled biomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been labeled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BiomeDictionary for InMemoryDictionary {
    fn add_labels(&mut self, id: &BiomeId, labels: &BTreeSet<Label>) -> Result<()> {
        if self.rejected.contains(id) {
            return Err(CompatError::Dictionary {
                biome: id.clone(),
                reason: "biome is not registered with the host".to_string(),
            });
        }
        self.entries
            .entry(id.clone())
            .or_default()
            .extend(labels.iter().copied());
        self.writes += 1;
        Ok(())
    }

    fn labels_of(&self, id: &BiomeId) -> BTreeSet<Label> {
        self.entries.get(id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> BiomeId {
        BiomeId::parse(raw).expect("valid id")
    }

    #[test]
    fn snapshot_reports_loaded_packs() {
        let snapshot = RegistrySnapshot::parse(&["minecraft:plains", "biomesoplenty:bayou"])
            .expect("valid");
        assert!(snapshot.is_pack_loaded("biomesoplenty"));
        assert!(snapshot.is_pack_loaded("minecraft"));
        assert!(!snapshot.is_pack_loaded("terralith"));
        assert_eq!(snapshot.biome_ids().expect("available").len(), 2);
    }

    #[test]
    fn snapshot_parse_rejects_bad_ids() {
        assert!(RegistrySnapshot::parse(&["biomesoplenty:bayou", "nope"]).is_err());
    }

    #[test]
    fn unavailable_snapshot_errors() {
        let snapshot = RegistrySnapshot::unavailable(["biomesoplenty"]);
        assert!(snapshot.is_pack_loaded("biomesoplenty"));
        assert!(!snapshot.is_available());
        assert!(matches!(
            snapshot.biome_ids(),
            Err(CompatError::RegistryUnavailable(_))
        ));
    }

    #[test]
    fn late_registration_makes_registry_available() {
        let mut snapshot = RegistrySnapshot::unavailable(["biomesoplenty"]);
        snapshot.register(id("biomesoplenty:crystal_grove"));
        assert_eq!(
            snapshot.biome_ids().expect("available"),
            vec![id("biomesoplenty:crystal_grove")]
        );
    }

    #[test]
    fn dictionary_accumulates_labels() {
        let mut dict = InMemoryDictionary::new();
        let bayou = id("biomesoplenty:bayou");
        dict.add_labels(&bayou, &BTreeSet::from([Label::Swamp])).expect("write");
        dict.add_labels(&bayou, &BTreeSet::from([Label::Wet])).expect("write");
        assert_eq!(dict.labels_of(&bayou), BTreeSet::from([Label::Swamp, Label::Wet]));
        assert_eq!(dict.write_count(), 2);
        assert!(dict.labels_of(&id("biomesoplenty:crag")).is_empty());
    }

    #[test]
    fn rejected_writes_fail() {
        let mut dict = InMemoryDictionary::new();
        let crag = id("biomesoplenty:crag");
        dict.reject(crag.clone());
        let err = dict
            .add_labels(&crag, &BTreeSet::from([Label::Mountain]))
            .expect_err("rejected");
        assert!(matches!(err, CompatError::Dictionary { .. }));
        assert!(dict.is_empty());
    }
}
