//! The classifier - turns a biome id into a label set, at most once per id.
//!
//! Precedence, first match wins:
//!
//! 1. already processed → nothing
//! 2. ignore list → no labels
//! 3. custom mapping with at least one resolvable label → exactly those labels
//! 4. name inference over the path component
//!
//! The processed set only grows; it lives as long as the [`Classifier`].

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info, warn};

use crate::config::ValidatedConfig;
use crate::error::CompatError;
use crate::inference;
use crate::overrides::{IgnoreSet, OverrideTable};
use crate::types::{BiomeId, Label, format_labels};
use crate::vocabulary::{LabelResolver, Vocabulary};

/// Where a classification result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSource {
    /// The id was handled earlier; nothing was done.
    AlreadyProcessed,
    /// The id is on the ignore list.
    Ignored,
    /// Labels came from a custom mapping.
    Override,
    /// Labels came from name inference.
    Inferred,
    /// Inference matched nothing.
    Unlabeled,
}

/// Result of classifying one biome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The biome that was classified.
    pub id: BiomeId,
    /// Labels to forward to the host. Empty for every source except
    /// `Override` and `Inferred`.
    pub labels: BTreeSet<Label>,
    /// How the labels were produced.
    pub source: LabelSource,
}

impl Classification {
    fn empty(id: &BiomeId, source: LabelSource) -> Self {
        Self {
            id: id.clone(),
            labels: BTreeSet::new(),
            source,
        }
    }

    /// Whether there is anything to forward to the host.
    #[must_use]
    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }
}

/// Running counts per [`LabelSource`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationStats {
    /// Calls short-circuited by the processed guard.
    pub skipped: u32,
    /// Ids on the ignore list.
    pub ignored: u32,
    /// Ids labeled from custom mappings.
    pub overridden: u32,
    /// Ids labeled by inference.
    pub inferred: u32,
    /// Ids inference could not label.
    pub unlabeled: u32,
}

impl ClassificationStats {
    fn record(&mut self, source: LabelSource) {
        match source {
            LabelSource::AlreadyProcessed => self.skipped += 1,
            LabelSource::Ignored => self.ignored += 1,
            LabelSource::Override => self.overridden += 1,
            LabelSource::Inferred => self.inferred += 1,
            LabelSource::Unlabeled => self.unlabeled += 1,
        }
    }

    /// Ids that were actually processed (everything but skips).
    #[must_use]
    pub fn processed(&self) -> u32 {
        self.ignored + self.overridden + self.inferred + self.unlabeled
    }
}

/// Classification context: config tables, label resolver and processed set.
///
/// Construct one per process (or per test).
pub struct Classifier {
    ignore: IgnoreSet,
    overrides: OverrideTable,
    resolver: Box<dyn LabelResolver>,
    processed: HashSet<BiomeId>,
    detailed_logging: bool,
    stats: ClassificationStats,
}

impl Classifier {
    /// Create a classifier from validated config and a host label resolver.
    #[must_use]
    pub fn new(config: &ValidatedConfig, resolver: Box<dyn LabelResolver>) -> Self {
        Self {
            ignore: config.ignore.clone(),
            overrides: config.overrides.clone(),
            resolver,
            processed: HashSet::new(),
            detailed_logging: config.detailed_logging,
            stats: ClassificationStats::default(),
        }
    }

    /// A classifier using the full built-in vocabulary.
    #[must_use]
    pub fn with_vocabulary(config: &ValidatedConfig) -> Self {
        Self::new(config, Box::new(Vocabulary::full()))
    }

    /// Classify `id`, marking it processed.
    pub fn classify(&mut self, id: &BiomeId) -> Classification {
        let result = self.evaluate(id);
        self.stats.record(result.source);
        result
    }

    fn evaluate(&mut self, id: &BiomeId) -> Classification {
        if self.processed.contains(id) {
            debug!(biome = %id, "Already processed, skipping");
            return Classification::empty(id, LabelSource::AlreadyProcessed);
        }

        if self.ignore.contains(id) {
            if self.detailed_logging {
                info!(biome = %id, "Biome is in the ignore list, skipping");
            }
            self.processed.insert(id.clone());
            return Classification::empty(id, LabelSource::Ignored);
        }

        if let Some(labels) = self.overrides.resolve(id, self.resolver.as_ref()) {
            if !labels.is_empty() {
                if self.detailed_logging {
                    info!(biome = %id, labels = %format_labels(&labels), "Custom mapped");
                }
                self.processed.insert(id.clone());
                return Classification {
                    id: id.clone(),
                    labels,
                    source: LabelSource::Override,
                };
            }
            warn!(biome = %id, "Custom mapping has no resolvable labels, falling back to inference");
        }

        let labels = inference::infer_labels(id.path());
        self.processed.insert(id.clone());

        if labels.is_empty() {
            let miss = CompatError::InferenceMiss(id.clone());
            warn!(biome = %id, "{miss}");
            return Classification::empty(id, LabelSource::Unlabeled);
        }

        if self.detailed_logging {
            info!(biome = %id, labels = %format_labels(&labels), "Auto-mapped");
            let fired: Vec<&str> = inference::matching_rules(id.path())
                .map(|(needle, _)| needle)
                .collect();
            debug!(biome = %id, rules = ?fired, "Inference rules fired");
        }
        Classification {
            id: id.clone(),
            labels,
            source: LabelSource::Inferred,
        }
    }

    /// Whether `id` has been processed.
    #[must_use]
    pub fn is_processed(&self, id: &BiomeId) -> bool {
        self.processed.contains(id)
    }

    /// Number of distinct ids processed so far.
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Counts per outcome since construction.
    #[must_use]
    pub fn stats(&self) -> ClassificationStats {
        self.stats
    }

    /// Whether per-biome info logging is on.
    #[must_use]
    pub fn detailed_logging(&self) -> bool {
        self.detailed_logging
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("ignored", &self.ignore.len())
            .field("overrides", &self.overrides.len())
            .field("processed", &self.processed.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompatConfig;

    fn id(raw: &str) -> BiomeId {
        BiomeId::parse(raw).expect("valid id")
    }

    fn classifier(ignored: &[&str], mappings: &[&str]) -> Classifier {
        let config = CompatConfig {
            target_namespace: "ns".into(),
            ignored_biomes: ignored.iter().map(|s| (*s).to_string()).collect(),
            custom_mappings: mappings.iter().map(|s| (*s).to_string()).collect(),
            ..CompatConfig::default()
        };
        Classifier::with_vocabulary(&config.validate())
    }

    #[test]
    fn override_then_already_processed() {
        let mut c = classifier(&[], &["ns:jade_cliffs=MOUNTAIN,FOREST,COLD"]);
        let first = c.classify(&id("ns:jade_cliffs"));
        assert_eq!(first.source, LabelSource::Override);
        assert_eq!(
            first.labels,
            BTreeSet::from([Label::Mountain, Label::Forest, Label::Cold])
        );

        let second = c.classify(&id("ns:jade_cliffs"));
        assert_eq!(second.source, LabelSource::AlreadyProcessed);
        assert!(!second.has_labels());
        assert_eq!(c.processed_count(), 1);
        assert_eq!(c.stats().overridden, 1);
        assert_eq!(c.stats().skipped, 1);
    }

    #[test]
    fn override_does_not_union_with_inference() {
        // "cold_swamp" would infer COLD, SWAMP and WET.
        let mut c = classifier(&[], &["ns:cold_swamp=HOT"]);
        let result = c.classify(&id("ns:cold_swamp"));
        assert_eq!(result.labels, BTreeSet::from([Label::Hot]));
    }

    #[test]
    fn ignore_beats_override_and_inference() {
        let mut c = classifier(&["ns:frozen_forest"], &["ns:frozen_forest=HOT"]);
        let result = c.classify(&id("ns:frozen_forest"));
        assert_eq!(result.source, LabelSource::Ignored);
        assert!(result.labels.is_empty());
        assert!(c.is_processed(&id("ns:frozen_forest")));
    }

    #[test]
    fn inference_accumulates() {
        let mut c = classifier(&[], &[]);
        let result = c.classify(&id("ns:cold_swamp_island"));
        assert_eq!(result.source, LabelSource::Inferred);
        for label in [Label::Cold, Label::Swamp, Label::Wet, Label::Island] {
            assert!(result.labels.contains(&label));
        }
    }

    #[test]
    fn inference_miss_still_marks_processed() {
        let mut c = classifier(&[], &[]);
        let result = c.classify(&id("ns:foo"));
        assert_eq!(result.source, LabelSource::Unlabeled);
        assert!(result.labels.is_empty());
        assert!(c.is_processed(&id("ns:foo")));
        assert_eq!(c.classify(&id("ns:foo")).source, LabelSource::AlreadyProcessed);
        assert_eq!(c.stats().unlabeled, 1);
    }

    #[test]
    fn unresolvable_override_falls_back_to_inference() {
        let mut c = classifier(&[], &["ns:y=BADTYPE"]);
        let miss = c.classify(&id("ns:y"));
        assert_eq!(miss.source, LabelSource::Unlabeled);

        let mut c = classifier(&[], &["ns:bayou=BADTYPE"]);
        let inferred = c.classify(&id("ns:bayou"));
        assert_eq!(inferred.source, LabelSource::Inferred);
        assert_eq!(inferred.labels, BTreeSet::from([Label::Swamp]));
    }

    #[test]
    fn partially_resolvable_override_keeps_known_labels() {
        let mut c = classifier(&[], &["ns:bayou=HOT,BADTYPE"]);
        let result = c.classify(&id("ns:bayou"));
        assert_eq!(result.source, LabelSource::Override);
        assert_eq!(result.labels, BTreeSet::from([Label::Hot]));
    }

    #[test]
    fn injected_resolver_limits_override_labels() {
        let config = CompatConfig {
            target_namespace: "ns".into(),
            custom_mappings: vec!["ns:crag=MOUNTAIN,CAVE".into()],
            ..CompatConfig::default()
        };
        let resolver = |name: &str| Label::from_name(name).filter(|l| *l == Label::Cave);
        let mut c = Classifier::new(&config.validate(), Box::new(resolver));
        assert_eq!(c.classify(&id("ns:crag")).labels, BTreeSet::from([Label::Cave]));
    }
}
