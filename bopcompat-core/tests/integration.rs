//! Integration Tests - config file → validated tables → classification.

use std::collections::BTreeSet;
use std::io::Write;

use bopcompat_core::{BiomeId, Classifier, CompatConfig, Label, LabelSource, Vocabulary};

fn id(raw: &str) -> BiomeId {
    BiomeId::parse(raw).expect("valid id")
}

// ---------------------------------------------------------------------------
// Config loaded from disk drives the classifier
// ---------------------------------------------------------------------------

#[test]
fn config_file_to_classification() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bopcompat.toml");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(
        file,
        r#"
enableDetailedLogging = false
ignoredBiomes = ["biomesoplenty:wasteland", "minecraft:desert"]
customMappings = [
    "biomesoplenty:jade_cliffs=MOUNTAIN,FOREST,COLD",
    "biomesoplenty:y=BADTYPE",
    "not a mapping",
]
"#
    )
    .expect("write");

    let config = CompatConfig::from_file(&path).expect("load");
    let validated = config.validate();
    assert_eq!(validated.ignore.len(), 1);
    assert_eq!(validated.overrides.len(), 2);

    let mut classifier = Classifier::with_vocabulary(&validated);

    let jade = classifier.classify(&id("biomesoplenty:jade_cliffs"));
    assert_eq!(jade.source, LabelSource::Override);
    assert_eq!(
        jade.labels,
        BTreeSet::from([Label::Mountain, Label::Forest, Label::Cold])
    );

    let waste = classifier.classify(&id("biomesoplenty:wasteland"));
    assert_eq!(waste.source, LabelSource::Ignored);

    // BADTYPE passes the shape check, resolves to nothing, and falls through
    // to inference, which finds nothing in "y".
    let y = classifier.classify(&id("biomesoplenty:y"));
    assert_eq!(y.source, LabelSource::Unlabeled);

    let stats = classifier.stats();
    assert_eq!(stats.processed(), 3);
    assert_eq!(stats.overridden, 1);
    assert_eq!(stats.ignored, 1);
    assert_eq!(stats.unlabeled, 1);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = CompatConfig::from_file(&dir.path().join("absent.toml")).expect_err("missing");
    assert!(matches!(err, bopcompat_core::CompatError::Io(_)));
}

// ---------------------------------------------------------------------------
// Default mappings against the seed biomes
// ---------------------------------------------------------------------------

#[test]
fn default_config_labels_known_biomes() {
    let mut classifier = Classifier::with_vocabulary(&CompatConfig::default().validate());

    let lavender = classifier.classify(&id("biomesoplenty:lavender_field"));
    assert_eq!(lavender.source, LabelSource::Override);
    assert_eq!(
        lavender.labels,
        BTreeSet::from([Label::Plains, Label::Lush, Label::Rare])
    );

    let volcano = classifier.classify(&id("biomesoplenty:volcano"));
    assert_eq!(volcano.labels, BTreeSet::from([Label::Hot]));

    let snowy = classifier.classify(&id("biomesoplenty:snowy_coniferous_forest"));
    assert_eq!(snowy.labels, BTreeSet::from([Label::Forest, Label::Cold]));

    let dune = classifier.classify(&id("biomesoplenty:dune_beach"));
    assert_eq!(dune.labels, BTreeSet::from([Label::Sandy, Label::Beach]));
}

#[test]
fn restricted_vocabulary_falls_back_when_nothing_resolves() {
    let validated = CompatConfig::default().validate();
    // The host only knows FOREST: jade_cliffs keeps FOREST, lavender_field
    // resolves nothing and is inferred instead.
    let mut classifier =
        Classifier::new(&validated, Box::new(Vocabulary::restricted([Label::Forest])));

    let jade = classifier.classify(&id("biomesoplenty:jade_cliffs"));
    assert_eq!(jade.source, LabelSource::Override);
    assert_eq!(jade.labels, BTreeSet::from([Label::Forest]));

    let lavender = classifier.classify(&id("biomesoplenty:lavender_field"));
    assert_eq!(lavender.source, LabelSource::Inferred);
    assert_eq!(lavender.labels, BTreeSet::from([Label::Plains, Label::End]));
}
