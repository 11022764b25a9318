//! Hand-curated biomes processed before the registry scan.
//!
//! The registry may be empty or unavailable during early setup. Seeding the
//! well-known biomes first means they are labeled even then.
//!
//! The list belongs to one content pack. Any other target namespace gets no
//! seeds and relies on the registry scan alone.

use bopcompat_core::BiomeId;
use bopcompat_core::config::DEFAULT_NAMESPACE;

/// Namespace the seed list was curated for.
pub const SEED_NAMESPACE: &str = DEFAULT_NAMESPACE;

/// Paths of the known biomes in [`SEED_NAMESPACE`].
pub const KNOWN_BIOMES: &[&str] = &[
    "jade_cliffs",
    "lavender_field",
    "crag",
    "volcano",
    "bayou",
    "cherry_blossom_grove",
    "coniferous_forest",
    "dead_forest",
    "fir_clearing",
    "field",
    "marsh",
    "meadow",
    "old_growth_dead_forest",
    "rainforest",
    "rocky_shrubland",
    "scrubland",
    "seasonal_forest",
    "snowy_coniferous_forest",
    "wetland",
    "wasteland",
    "dryland",
    "dune_beach",
    "lush_desert",
];

/// The seed ids to process when targeting `namespace`.
///
/// Empty unless `namespace` is [`SEED_NAMESPACE`].
#[must_use]
pub fn known_biome_ids(namespace: &str) -> Vec<BiomeId> {
    if namespace != SEED_NAMESPACE {
        return Vec::new();
    }
    KNOWN_BIOMES
        .iter()
        .filter_map(|path| BiomeId::new(SEED_NAMESPACE, *path).ok())
        .collect()
}
