//! # BOPCOMPAT Core Library
//!
//! Game-agnostic biome classification for content-pack compatibility.
//!
//! A [`Classifier`] turns a namespaced [`BiomeId`] into a set of [`Label`]s
//! drawn from the host's closed vocabulary:
//!
//! - **Ignore list** - biomes the user asked to leave untouched
//! - **Overrides** - user-authored `namespace:path=LABEL,LABEL` entries
//! - **Inference** - substring rules over the biome's path component
//!
//! Each biome is processed at most once per [`Classifier`]. Nothing in this
//! crate fails hard: malformed config entries are dropped, unknown labels are
//! skipped, and misses are logged through `tracing`.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod inference;
pub mod overrides;
pub mod types;
pub mod vocabulary;

pub use classifier::{Classification, ClassificationStats, Classifier, LabelSource};
pub use config::{CompatConfig, ValidatedConfig};
pub use error::CompatError;
pub use overrides::{IgnoreSet, OverrideTable};
pub use types::*;
pub use vocabulary::{LabelResolver, Vocabulary};
