//! # bopcompat-host - Host Integration for BOPCOMPAT
//!
//! This crate connects the game-agnostic `bopcompat-core` classifier to a
//! host engine's biome registry and biome dictionary.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │               Host engine               │
//! │  registry ──┐             ┌── dictionary │
//! │  ┌──────────┴─────────────┴──────────┐  │
//! │  │          bopcompat-host           │  │
//! │  │  on_ready ─► seeds + registry     │  │
//! │  │  on_late_scan ─► missed + report  │  │
//! │  │         ┌─────────────────┐       │  │
//! │  │         │ bopcompat-core  │       │  │
//! │  │         └─────────────────┘       │  │
//! │  └───────────────────────────────────┘  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `host` - registry / dictionary traits plus in-memory stand-ins
//! - `seeds` - hand-curated biome list processed before the registry scan
//! - `driver` - the two lifecycle entry points
//! - `report` - mapping report emitted after the late scan
//! - `telemetry` - `tracing` subscriber setup

pub mod driver;
pub mod host;
pub mod report;
pub mod seeds;
pub mod telemetry;

pub use driver::{CompatRuntime, PassSummary};
pub use host::{BiomeDictionary, BiomeRegistry, InMemoryDictionary, RegistrySnapshot};
pub use report::MappingReport;
