//! Orchestrator, telemetry and host-option decoding for the Fakt
//! fake-generation pipeline (spec §4.8, §6.2, §10).
//!
//! This crate is the top of the pipeline: it owns the signature cache,
//! drives each validated declaration through transform → emit →
//! compose → write, and reports a telemetry summary. Everything below
//! it (`fakt_frontend`, `fakt_transform`, `fakt_resolve`, `fakt_codegen`,
//! `fakt_cache`) is a pure library with no knowledge of the routing
//! record or the filesystem.

pub mod demo;
pub mod options;
pub mod orchestrator;
pub mod telemetry;
pub mod tracing_setup;

pub use options::{decode_routing_record, warn_unknown_options, OptionsError, PluginOptions};
pub use orchestrator::{DeclarationOutcome, Orchestrator, OrchestratorError};
pub use telemetry::{FakeMetrics, Telemetry, TelemetryLevel};
