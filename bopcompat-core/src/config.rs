//! Configuration for the biome compatibility shim.
//!
//! Keys match the host's config file (`enableAutoRegistration`,
//! `customMappings`, ...). The config is loaded once at startup and is static
//! for the lifetime of the process.

use serde::{Deserialize, Serialize};

use crate::overrides::{IgnoreSet, OverrideTable};

/// Namespace of the content pack whose biomes get labeled.
pub const DEFAULT_NAMESPACE: &str = "biomesoplenty";

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatConfig {
    /// Whether the bulk registration driver runs at all.
    #[serde(default = "default_true")]
    pub enable_auto_registration: bool,
    /// Per-biome log lines and the final mapping report.
    #[serde(default = "default_true")]
    pub enable_detailed_logging: bool,
    /// Biomes to skip entirely; each must be in the target namespace.
    #[serde(default)]
    pub ignored_biomes: Vec<String>,
    /// `namespace:name=LABEL1,LABEL2` entries.
    #[serde(default = "default_custom_mappings")]
    pub custom_mappings: Vec<String>,
    /// Content-pack namespace to process.
    #[serde(default = "default_namespace")]
    pub target_namespace: String,
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            enable_auto_registration: true,
            enable_detailed_logging: true,
            ignored_biomes: Vec::new(),
            custom_mappings: default_custom_mappings(),
            target_namespace: default_namespace(),
            log_level: default_log_level(),
        }
    }
}

impl CompatConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `CompatError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::CompatError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Serialize back to TOML, e.g. to write out a default config file.
    ///
    /// # Errors
    /// Returns `CompatError::Config` if serialization fails.
    pub fn to_toml(&self) -> crate::error::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::CompatError::Config(e.to_string()))
    }

    /// Parse the ignore list and custom mappings, dropping invalid entries.
    #[must_use]
    pub fn validate(&self) -> ValidatedConfig {
        ValidatedConfig {
            namespace: self.target_namespace.clone(),
            auto_registration: self.enable_auto_registration,
            detailed_logging: self.enable_detailed_logging,
            ignore: IgnoreSet::from_entries(&self.ignored_biomes, &self.target_namespace),
            overrides: OverrideTable::from_entries(&self.custom_mappings, &self.target_namespace),
        }
    }
}

/// The config after entry validation, ready to drive a classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Target namespace.
    pub namespace: String,
    /// Whether the registration driver runs.
    pub auto_registration: bool,
    /// Whether per-biome logging is on.
    pub detailed_logging: bool,
    /// Parsed ignore list.
    pub ignore: IgnoreSet,
    /// Parsed custom mappings.
    pub overrides: OverrideTable,
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        CompatConfig::default().validate()
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool { true }
fn default_namespace() -> String { DEFAULT_NAMESPACE.to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_custom_mappings() -> Vec<String> {
    vec![
        "biomesoplenty:jade_cliffs=MOUNTAIN,FOREST,COLD".to_string(),
        "biomesoplenty:lavender_field=PLAINS,LUSH,RARE".to_string(),
    ]
}
