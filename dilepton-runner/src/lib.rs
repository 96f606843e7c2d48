//! Dilepton Runner — batch driver around `dilepton-core`.
//!
//! This crate provides:
//! - TOML run configuration (channels, parallelism, cut thresholds)
//! - Per-event selection over a batch, fanned out with rayon
//! - Per-event output records, one per input event, never aggregated

pub mod config;
pub mod result;
pub mod runner;

pub use config::{RunConfig, RunConfigError};
pub use result::EventSelection;
pub use runner::{run_events, select_event, RunError};
