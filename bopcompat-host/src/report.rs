//! Mapping report - what the host dictionary holds for each pack biome.

use std::collections::BTreeSet;
use std::fmt;

use bopcompat_core::error::Result;
use bopcompat_core::{BiomeId, CompatError, Label, format_labels};
use serde::Serialize;
use tracing::info;

use crate::host::{BiomeDictionary, BiomeRegistry};

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// The biome.
    pub id: BiomeId,
    /// Labels the dictionary holds for it.
    pub labels: BTreeSet<Label>,
}

/// Registry biomes in one namespace with their current labels, sorted by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingReport {
    /// The namespace reported on.
    pub namespace: String,
    /// One entry per registered biome in the namespace.
    pub entries: Vec<ReportEntry>,
}

impl MappingReport {
    /// Read the registry and dictionary into a report.
    ///
    /// # Errors
    /// Returns `CompatError::RegistryUnavailable` if the registry cannot be read.
    pub fn collect<R, D>(namespace: &str, registry: &R, dictionary: &D) -> Result<Self>
    where
        R: BiomeRegistry + ?Sized,
        D: BiomeDictionary + ?Sized,
    {
        let mut entries: Vec<ReportEntry> = registry
            .biome_ids()?
            .into_iter()
            .filter(|id| id.in_namespace(namespace))
            .map(|id| {
                let labels = dictionary.labels_of(&id);
                ReportEntry { id, labels }
            })
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries.dedup_by(|a, b| a.id == b.id);

        Ok(Self {
            namespace: namespace.to_string(),
            entries,
        })
    }

    /// Entries with no labels.
    pub fn unlabeled(&self) -> impl Iterator<Item = &BiomeId> {
        self.entries
            .iter()
            .filter(|e| e.labels.is_empty())
            .map(|e| &e.id)
    }

    /// Emit the report at info level, one line per biome.
    pub fn log(&self) {
        info!("--- Biome mapping report ---");
        for entry in &self.entries {
            info!("{}: {}", entry.id, format_labels(&entry.labels));
        }
        info!("---------------------------");
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    /// Returns `CompatError::Config` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CompatError::Config(e.to_string()))
    }
}

impl fmt::Display for MappingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Biome mapping report ---")?;
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.id, format_labels(&entry.labels))?;
        }
        write!(f, "---------------------------")
    }
}
