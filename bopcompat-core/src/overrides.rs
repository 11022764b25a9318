//! User-authored overrides and ignore lists.
//!
//! Custom mappings look like `biomesoplenty:jade_cliffs=MOUNTAIN,FOREST,COLD`.
//! Entries are shape-checked when the config is loaded and dropped with a
//! warning if malformed. Label names are kept as written and resolved later,
//! against whatever vocabulary the host supplies.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::warn;

use crate::error::{CompatError, Result};
use crate::types::{BiomeId, Label};
use crate::vocabulary::LabelResolver;

// ---------------------------------------------------------------------------
// Entry parsing
// ---------------------------------------------------------------------------

/// Parse one custom-mapping entry.
///
/// # Errors
/// Returns `CompatError::InvalidOverrideEntry` if the entry does not contain
/// exactly one `=`, the left side is not a biome id in `namespace`, or the
/// right side names no labels.
pub fn parse_mapping(entry: &str, namespace: &str) -> Result<(BiomeId, Vec<String>)> {
    let invalid = |reason: &str| CompatError::InvalidOverrideEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = entry.split('=');
    let (Some(lhs), Some(rhs), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid("expected exactly one '='"));
    };

    let id = parse_namespaced(lhs.trim(), namespace).map_err(|e| invalid(&e.to_string()))?;

    let names: Vec<String> = rhs
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(invalid("no label names after '='"));
    }

    Ok((id, names))
}

/// Parse a biome id that must belong to `namespace`.
///
/// # Errors
/// Returns `CompatError::InvalidBiomeId` if `raw` is not a valid id or is in
/// a different namespace.
pub fn parse_namespaced(raw: &str, namespace: &str) -> Result<BiomeId> {
    let id = BiomeId::parse(raw)?;
    if !id.in_namespace(namespace) {
        return Err(CompatError::InvalidBiomeId(format!(
            "{raw} (expected namespace '{namespace}')"
        )));
    }
    Ok(id)
}

// ---------------------------------------------------------------------------
// OverrideTable
// ---------------------------------------------------------------------------

/// Biome id → label names, from the user's custom mappings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: HashMap<BiomeId, Vec<String>>,
}

impl OverrideTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw config entries, dropping malformed ones.
    ///
    /// A later entry for the same biome replaces an earlier one.
    pub fn from_entries<S: AsRef<str>>(entries: &[S], namespace: &str) -> Self {
        let mut table = Self::new();
        for entry in entries {
            match parse_mapping(entry.as_ref(), namespace) {
                Ok((id, names)) => table.insert(id, names),
                Err(e) => warn!(error = %e, "Dropping custom mapping"),
            }
        }
        table
    }

    /// Insert or replace the label names for `id`.
    pub fn insert(&mut self, id: BiomeId, names: Vec<String>) {
        self.entries.insert(id, names);
    }

    /// Raw label names configured for `id`.
    #[must_use]
    pub fn names(&self, id: &BiomeId) -> Option<&[String]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Whether `id` has an override entry.
    #[must_use]
    pub fn contains(&self, id: &BiomeId) -> bool {
        self.entries.contains_key(id)
    }

    /// Resolve the override for `id`.
    ///
    /// Returns `None` if there is no entry. Names the resolver does not know
    /// are skipped with a warning, so the returned set may be empty.
    pub fn resolve(&self, id: &BiomeId, resolver: &dyn LabelResolver) -> Option<BTreeSet<Label>> {
        let names = self.entries.get(id)?;
        let mut labels = BTreeSet::new();
        for name in names {
            match resolver.resolve(name) {
                Some(label) => {
                    labels.insert(label);
                }
                None => {
                    let e = CompatError::UnresolvableLabel(name.clone());
                    warn!(biome = %id, error = %e, "Skipping label in custom mapping");
                }
            }
        }
        Some(labels)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// IgnoreSet
// ---------------------------------------------------------------------------

/// Biomes the user asked to leave unlabeled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    ids: HashSet<BiomeId>,
}

impl IgnoreSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw config entries, dropping ids outside `namespace`.
    pub fn from_entries<S: AsRef<str>>(entries: &[S], namespace: &str) -> Self {
        let mut set = Self::new();
        for entry in entries {
            match parse_namespaced(entry.as_ref().trim(), namespace) {
                Ok(id) => set.insert(id),
                Err(e) => warn!(error = %e, "Dropping ignored biome entry"),
            }
        }
        set
    }

    /// Add `id` to the set.
    pub fn insert(&mut self, id: BiomeId) {
        self.ids.insert(id);
    }

    /// Whether `id` is ignored.
    #[must_use]
    pub fn contains(&self, id: &BiomeId) -> bool {
        self.ids.contains(id)
    }

    /// Number of ignored biomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is ignored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
