//! Core type definitions: biome identifiers and the label vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CompatError, Result};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Namespaced biome identifier, `namespace:path`.
///
/// Both parts are non-empty. The namespace may contain `[a-z0-9_.-]`, the
/// path additionally `/`. Ordering is by namespace, then path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BiomeId {
    namespace: String,
    path: String,
}

impl BiomeId {
    /// Build an id from its two parts.
    ///
    /// # Errors
    /// Returns `CompatError::InvalidBiomeId` if either part is empty or
    /// contains characters outside the allowed set.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let path = path.into();
        if !valid_namespace(&namespace) || !valid_path(&path) {
            return Err(CompatError::InvalidBiomeId(format!("{namespace}:{path}")));
        }
        Ok(Self { namespace, path })
    }

    /// Parse `namespace:path`.
    ///
    /// # Errors
    /// Returns `CompatError::InvalidBiomeId` if there is not exactly one `:`
    /// or either side is invalid.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(path), None) => Self::new(namespace, path)
                .map_err(|_| CompatError::InvalidBiomeId(raw.to_string())),
            _ => Err(CompatError::InvalidBiomeId(raw.to_string())),
        }
    }

    /// The content-pack namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The biome name within its namespace.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this id belongs to `namespace`.
    #[must_use]
    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.namespace == namespace
    }
}

fn valid_namespace(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'_' | b'.' | b'-'))
}

fn valid_path(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'_' | b'.' | b'-' | b'/')
        })
}

impl fmt::Display for BiomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for BiomeId {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BiomeId {
    type Error = CompatError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<BiomeId> for String {
    fn from(id: BiomeId) -> Self {
        id.to_string()
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// A classification tag from the host's closed biome vocabulary.
///
/// Grouped as climate/condition, vegetation, terrain and dimension types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    // Climate and condition
    /// Hot climate.
    Hot,
    /// Cold climate.
    Cold,
    /// Sparse vegetation.
    Sparse,
    /// Dense vegetation.
    Dense,
    /// Wet climate.
    Wet,
    /// Dry climate.
    Dry,
    /// Savanna.
    Savanna,
    /// Coniferous trees.
    Coniferous,
    /// Jungle.
    Jungle,
    /// Eerie atmosphere.
    Spooky,
    /// Barren or decaying.
    Dead,
    /// Abundant vegetation.
    Lush,
    /// Mushroom biome.
    Mushroom,
    /// Magical biome.
    Magical,
    /// Rarely generated.
    Rare,
    /// Raised flat terrain.
    Plateau,
    /// Variant of another biome.
    Modified,

    // Terrain
    /// Ocean.
    Ocean,
    /// River.
    River,
    /// Other standing water.
    Water,
    /// Mesa / badlands.
    Mesa,
    /// Forest.
    Forest,
    /// Plains.
    Plains,
    /// Mountains.
    Mountain,
    /// Hills.
    Hills,
    /// Swamp.
    Swamp,
    /// Sandy ground.
    Sandy,
    /// Snow cover.
    Snowy,
    /// Wasteland.
    Wasteland,
    /// Beach.
    Beach,
    /// Cave biome.
    Cave,
    /// Island.
    Island,

    // Dimensions
    /// The void.
    Void,
    /// Overworld.
    Overworld,
    /// The Nether.
    Nether,
    /// The End.
    End,
}

impl Label {
    /// Every label, in declaration order.
    pub const ALL: [Label; 36] = [
        Self::Hot,
        Self::Cold,
        Self::Sparse,
        Self::Dense,
        Self::Wet,
        Self::Dry,
        Self::Savanna,
        Self::Coniferous,
        Self::Jungle,
        Self::Spooky,
        Self::Dead,
        Self::Lush,
        Self::Mushroom,
        Self::Magical,
        Self::Rare,
        Self::Plateau,
        Self::Modified,
        Self::Ocean,
        Self::River,
        Self::Water,
        Self::Mesa,
        Self::Forest,
        Self::Plains,
        Self::Mountain,
        Self::Hills,
        Self::Swamp,
        Self::Sandy,
        Self::Snowy,
        Self::Wasteland,
        Self::Beach,
        Self::Cave,
        Self::Island,
        Self::Void,
        Self::Overworld,
        Self::Nether,
        Self::End,
    ];

    /// Upper-case name as used in config files and by the host dictionary.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hot => "HOT",
            Self::Cold => "COLD",
            Self::Sparse => "SPARSE",
            Self::Dense => "DENSE",
            Self::Wet => "WET",
            Self::Dry => "DRY",
            Self::Savanna => "SAVANNA",
            Self::Coniferous => "CONIFEROUS",
            Self::Jungle => "JUNGLE",
            Self::Spooky => "SPOOKY",
            Self::Dead => "DEAD",
            Self::Lush => "LUSH",
            Self::Mushroom => "MUSHROOM",
            Self::Magical => "MAGICAL",
            Self::Rare => "RARE",
            Self::Plateau => "PLATEAU",
            Self::Modified => "MODIFIED",
            Self::Ocean => "OCEAN",
            Self::River => "RIVER",
            Self::Water => "WATER",
            Self::Mesa => "MESA",
            Self::Forest => "FOREST",
            Self::Plains => "PLAINS",
            Self::Mountain => "MOUNTAIN",
            Self::Hills => "HILLS",
            Self::Swamp => "SWAMP",
            Self::Sandy => "SANDY",
            Self::Snowy => "SNOWY",
            Self::Wasteland => "WASTELAND",
            Self::Beach => "BEACH",
            Self::Cave => "CAVE",
            Self::Island => "ISLAND",
            Self::Void => "VOID",
            Self::Overworld => "OVERWORLD",
            Self::Nether => "NETHER",
            Self::End => "END",
        }
    }

    /// Look up a label by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Label {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| CompatError::UnresolvableLabel(s.to_string()))
    }
}

/// Render a label set as `[A, B, C]` for log lines.
#[must_use]
pub fn format_labels<'a>(labels: impl IntoIterator<Item = &'a Label>) -> String {
    let names: Vec<&str> = labels.into_iter().map(|l| l.name()).collect();
    format!("[{}]", names.join(", "))
}
