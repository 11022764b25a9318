//! Name inference - derives labels from a biome's path by substring rules.
//!
//! Every rule whose substring occurs anywhere in the lower-cased name adds
//! its label. Rules are independent, so one name can pick up several labels
//! and the order of [`RULES`] has no effect on the result.

use std::collections::BTreeSet;

use crate::types::Label;

/// `(substring, label)` rules, grouped terrain / climate / special.
pub const RULES: &[(&str, Label)] = &[
    // Terrain
    ("forest", Label::Forest),
    ("grove", Label::Forest),
    ("woodland", Label::Forest),
    ("field", Label::Plains),
    ("plain", Label::Plains),
    ("meadow", Label::Plains),
    ("mountain", Label::Mountain),
    ("cliff", Label::Mountain),
    ("crag", Label::Mountain),
    ("highland", Label::Mountain),
    ("desert", Label::Sandy),
    ("dune", Label::Sandy),
    ("wasteland", Label::Sandy),
    ("dryland", Label::Sandy),
    ("jungle", Label::Jungle),
    ("rainforest", Label::Jungle),
    ("tropical", Label::Jungle),
    ("marsh", Label::Swamp),
    ("swamp", Label::Swamp),
    ("bog", Label::Swamp),
    ("wetland", Label::Swamp),
    ("bayou", Label::Swamp),
    ("beach", Label::Beach),
    ("shore", Label::Beach),
    ("ocean", Label::Ocean),
    ("sea", Label::Ocean),
    ("river", Label::River),
    ("lake", Label::Water),
    ("end", Label::End),
    ("nether", Label::Nether),
    ("hell", Label::Nether),
    ("cave", Label::Cave),
    ("grotto", Label::Cave),
    ("mesa", Label::Mesa),
    ("badland", Label::Mesa),
    ("savanna", Label::Savanna),
    // Climate and condition
    ("volcano", Label::Hot),
    ("lava", Label::Hot),
    ("hot", Label::Hot),
    ("desert", Label::Hot),
    ("cold", Label::Cold),
    ("snow", Label::Cold),
    ("frozen", Label::Cold),
    ("ice", Label::Cold),
    ("wet", Label::Wet),
    ("marsh", Label::Wet),
    ("swamp", Label::Wet),
    ("rain", Label::Wet),
    ("dry", Label::Dry),
    ("arid", Label::Dry),
    ("waste", Label::Dry),
    ("dead", Label::Dead),
    ("waste", Label::Dead),
    ("corrupt", Label::Dead),
    ("lush", Label::Lush),
    ("fertile", Label::Lush),
    ("garden", Label::Lush),
    ("magic", Label::Magical),
    ("enchant", Label::Magical),
    ("mystic", Label::Magical),
    ("rare", Label::Rare),
    ("unusual", Label::Rare),
    ("spooky", Label::Spooky),
    ("haunted", Label::Spooky),
    ("ominous", Label::Spooky),
    // Special
    ("mushroom", Label::Mushroom),
    ("hills", Label::Hills),
    ("island", Label::Island),
    ("highland", Label::Plateau),
];

/// Labels implied by `name` (usually a biome path).
#[must_use]
pub fn infer_labels(name: &str) -> BTreeSet<Label> {
    matching_rules(name).map(|(_, label)| label).collect()
}

/// The rules that fire for `name`, in table order.
pub fn matching_rules(name: &str) -> impl Iterator<Item = (&'static str, Label)> {
    let name = name.to_lowercase();
    RULES
        .iter()
        .copied()
        .filter(move |(needle, _)| name.contains(needle))
}
