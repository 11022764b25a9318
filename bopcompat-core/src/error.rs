//! Error types for the BOPCOMPAT core library.

use thiserror::Error;

use crate::types::BiomeId;

/// Top-level error type for all BOPCOMPAT operations.
///
/// None of these are fatal to the host: callers log them and move on.
#[derive(Error, Debug)]
pub enum CompatError {
    /// A string could not be parsed as a `namespace:path` identifier.
    #[error("Invalid biome id '{0}': expected 'namespace:path'")]
    InvalidBiomeId(String),

    /// A custom-mapping entry was malformed and has been dropped.
    #[error("Invalid override entry '{entry}': {reason}")]
    InvalidOverrideEntry {
        /// The raw config entry.
        entry: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A label name is not part of the known vocabulary.
    #[error("Unresolvable label: {0}")]
    UnresolvableLabel(String),

    /// Name inference produced no labels for this biome.
    #[error("No labels could be inferred for biome {0}")]
    InferenceMiss(BiomeId),

    /// The host registry cannot be queried yet.
    #[error("Biome registry unavailable: {0}")]
    RegistryUnavailable(String),

    /// The host dictionary refused a label write.
    #[error("Dictionary rejected labels for {biome}: {reason}")]
    Dictionary {
        /// Biome the write was for.
        biome: BiomeId,
        /// Reason reported by the host.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, CompatError>;
