//! Registration driver - the two lifecycle entry points.
//!
//! ## Passes
//!
//! | Entry point     | Host moment      | Work                                      |
//! |-----------------|------------------|-------------------------------------------|
//! | `on_ready`      | common setup     | seed list, then registry scan             |
//! | `on_late_scan`  | server starting  | registry scan for missed ids, then report |
//!
//! Both passes are skipped when the content pack is absent or
//! `enableAutoRegistration` is off. Nothing here returns an error: problems
//! are logged and counted in the [`PassSummary`].

use bopcompat_core::{
    BiomeId, Classification, ClassificationStats, Classifier, CompatConfig, LabelResolver,
    LabelSource, format_labels,
};
use tracing::{debug, error, info, warn};

use crate::host::{BiomeDictionary, BiomeRegistry};
use crate::report::MappingReport;
use crate::seeds;

/// Outcome counts for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Whether the pass ran at all (pack loaded and auto-registration on).
    pub ran: bool,
    /// Whether the registry could be scanned.
    pub registry_available: bool,
    /// Ids handed to the classifier.
    pub visited: u32,
    /// Ids whose labels reached the dictionary.
    pub labeled: u32,
    /// Ids on the ignore list.
    pub ignored: u32,
    /// Ids with no labels from override or inference.
    pub unlabeled: u32,
    /// Ids that had already been processed.
    pub skipped: u32,
    /// Ids whose dictionary write failed.
    pub failed: u32,
}

impl PassSummary {
    fn record(&mut self, result: &Classification) {
        self.visited += 1;
        match result.source {
            LabelSource::AlreadyProcessed => self.skipped += 1,
            LabelSource::Ignored => self.ignored += 1,
            LabelSource::Unlabeled => self.unlabeled += 1,
            LabelSource::Override | LabelSource::Inferred => {}
        }
    }
}

/// Process-lifetime state of the shim: config flags plus the classifier.
#[derive(Debug)]
pub struct CompatRuntime {
    classifier: Classifier,
    namespace: String,
    auto_registration: bool,
    detailed_logging: bool,
}

impl CompatRuntime {
    /// Validate `config` and build the runtime without running a pass.
    #[must_use]
    pub fn new(config: &CompatConfig, resolver: Box<dyn LabelResolver>) -> Self {
        let validated = config.validate();
        info!(
            namespace = %validated.namespace,
            ignored = validated.ignore.len(),
            overrides = validated.overrides.len(),
            "Biome compatibility initialized"
        );
        Self {
            classifier: Classifier::new(&validated, resolver),
            namespace: validated.namespace,
            auto_registration: validated.auto_registration,
            detailed_logging: validated.detailed_logging,
        }
    }

    /// First lifecycle pass: build the runtime, label the seed list, then
    /// every registered biome in the target namespace.
    pub fn on_ready<R, D>(
        config: &CompatConfig,
        resolver: Box<dyn LabelResolver>,
        registry: &R,
        dictionary: &mut D,
    ) -> (Self, PassSummary)
    where
        R: BiomeRegistry + ?Sized,
        D: BiomeDictionary + ?Sized,
    {
        let mut runtime = Self::new(config, resolver);
        let summary = runtime.ready_pass(registry, dictionary);
        (runtime, summary)
    }

    fn ready_pass<R, D>(&mut self, registry: &R, dictionary: &mut D) -> PassSummary
    where
        R: BiomeRegistry + ?Sized,
        D: BiomeDictionary + ?Sized,
    {
        let mut summary = PassSummary::default();
        if !self.should_run(registry) {
            return summary;
        }
        summary.ran = true;
        info!(namespace = %self.namespace, "Content pack detected, registering biome compatibility");

        for id in seeds::known_biome_ids(&self.namespace) {
            self.register(&id, dictionary, &mut summary);
        }
        self.scan_registry(registry, dictionary, &mut summary);

        info!(
            visited = summary.visited,
            labeled = summary.labeled,
            unlabeled = summary.unlabeled,
            "Initial biome registration finished"
        );
        summary
    }

    /// Second lifecycle pass: label biomes registered after `on_ready`, then
    /// emit the mapping report if detailed logging is on.
    pub fn on_late_scan<R, D>(&mut self, registry: &R, dictionary: &mut D) -> PassSummary
    where
        R: BiomeRegistry + ?Sized,
        D: BiomeDictionary + ?Sized,
    {
        let mut summary = PassSummary::default();
        if !self.should_run(registry) {
            return summary;
        }
        summary.ran = true;
        info!("Server starting, checking for any missed biomes");

        self.scan_registry(registry, dictionary, &mut summary);

        if self.detailed_logging {
            match MappingReport::collect(&self.namespace, registry, dictionary) {
                Ok(report) => report.log(),
                Err(e) => warn!(error = %e, "Cannot build mapping report"),
            }
        }
        summary
    }

    /// Report of what the dictionary currently holds for the namespace.
    ///
    /// # Errors
    /// Returns `CompatError::RegistryUnavailable` if the registry cannot be read.
    pub fn mapping_report<R, D>(
        &self,
        registry: &R,
        dictionary: &D,
    ) -> bopcompat_core::error::Result<MappingReport>
    where
        R: BiomeRegistry + ?Sized,
        D: BiomeDictionary + ?Sized,
    {
        MappingReport::collect(&self.namespace, registry, dictionary)
    }

    fn should_run<R: BiomeRegistry + ?Sized>(&self, registry: &R) -> bool {
        if !registry.is_pack_loaded(&self.namespace) {
            info!(namespace = %self.namespace, "Content pack not found, skipping biome registration");
            return false;
        }
        if !self.auto_registration {
            info!("Auto-registration is disabled in config, skipping");
            return false;
        }
        true
    }

    fn scan_registry<R, D>(&mut self, registry: &R, dictionary: &mut D, summary: &mut PassSummary)
    where
        R: BiomeRegistry + ?Sized,
        D: BiomeDictionary + ?Sized,
    {
        let ids = match registry.biome_ids() {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "Cannot access biome registry, skipping scan");
                return;
            }
        };
        summary.registry_available = true;

        for id in ids {
            if id.in_namespace(&self.namespace) && !self.classifier.is_processed(&id) {
                self.register(&id, dictionary, summary);
            }
        }
    }

    fn register<D>(&mut self, id: &BiomeId, dictionary: &mut D, summary: &mut PassSummary)
    where
        D: BiomeDictionary + ?Sized,
    {
        let result = self.classifier.classify(id);
        summary.record(&result);
        if !result.has_labels() {
            return;
        }
        match dictionary.add_labels(id, &result.labels) {
            Ok(()) => {
                summary.labeled += 1;
                debug!(biome = %id, labels = %format_labels(&result.labels), "Labels registered");
            }
            Err(e) => {
                summary.failed += 1;
                error!(biome = %id, error = %e, "Error registering biome compatibility");
            }
        }
    }

    /// Whether `id` has been processed by either pass.
    #[must_use]
    pub fn is_processed(&self, id: &BiomeId) -> bool {
        self.classifier.is_processed(id)
    }

    /// Classifier counts since startup.
    #[must_use]
    pub fn stats(&self) -> ClassificationStats {
        self.classifier.stats()
    }

    /// The target namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{InMemoryDictionary, RegistrySnapshot};
    use bopcompat_core::{Label, Vocabulary};
    use std::collections::BTreeSet;

    fn id(raw: &str) -> BiomeId {
        BiomeId::parse(raw).expect("valid id")
    }

    fn vocab() -> Box<dyn LabelResolver> {
        Box::new(Vocabulary::full())
    }

    #[test]
    fn ready_pass_labels_seeds_without_registry() {
        let registry = RegistrySnapshot::unavailable(["biomesoplenty"]);
        let mut dict = InMemoryDictionary::new();
        let (runtime, summary) =
            CompatRuntime::on_ready(&CompatConfig::default(), vocab(), &registry, &mut dict);

        assert!(summary.ran);
        assert!(!summary.registry_available);
        assert_eq!(summary.visited as usize, seeds::KNOWN_BIOMES.len());
        assert!(runtime.is_processed(&id("biomesoplenty:volcano")));
        assert_eq!(
            dict.labels_of(&id("biomesoplenty:jade_cliffs")),
            BTreeSet::from([Label::Mountain, Label::Forest, Label::Cold])
        );
    }

    #[test]
    fn missing_pack_skips_everything() {
        let registry = RegistrySnapshot::parse(&["minecraft:plains"]).expect("valid");
        let mut dict = InMemoryDictionary::new();
        let (mut runtime, summary) =
            CompatRuntime::on_ready(&CompatConfig::default(), vocab(), &registry, &mut dict);
        assert!(!summary.ran);
        assert!(dict.is_empty());
        assert!(!runtime.on_late_scan(&registry, &mut dict).ran);
    }

    #[test]
    fn disabled_auto_registration_skips_everything() {
        let config = CompatConfig {
            enable_auto_registration: false,
            ..CompatConfig::default()
        };
        let registry = RegistrySnapshot::parse(&["biomesoplenty:bayou"]).expect("valid");
        let mut dict = InMemoryDictionary::new();
        let (runtime, summary) = CompatRuntime::on_ready(&config, vocab(), &registry, &mut dict);
        assert!(!summary.ran);
        assert!(!runtime.is_processed(&id("biomesoplenty:bayou")));
        assert!(dict.is_empty());
    }

    #[test]
    fn registry_scan_ignores_other_namespaces() {
        let registry =
            RegistrySnapshot::parse(&["minecraft:cold_ocean", "biomesoplenty:tropics"]).expect("valid");
        let mut dict = InMemoryDictionary::new();
        let (runtime, summary) =
            CompatRuntime::on_ready(&CompatConfig::default(), vocab(), &registry, &mut dict);
        assert!(summary.registry_available);
        assert!(!runtime.is_processed(&id("minecraft:cold_ocean")));
        assert!(dict.labels_of(&id("minecraft:cold_ocean")).is_empty());
        assert!(runtime.is_processed(&id("biomesoplenty:tropics")));
    }

    #[test]
    fn dictionary_failure_does_not_stop_the_pass() {
        let registry = RegistrySnapshot::unavailable(["biomesoplenty"]);
        let mut dict = InMemoryDictionary::new();
        dict.reject(id("biomesoplenty:crag"));
        let (_, summary) =
            CompatRuntime::on_ready(&CompatConfig::default(), vocab(), &registry, &mut dict);
        assert_eq!(summary.failed, 1);
        assert!(dict.labels_of(&id("biomesoplenty:volcano")).contains(&Label::Hot));
    }
}
