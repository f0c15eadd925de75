//! Configuration loading and layering.
//!
//! Handles `calcheck.toml` loading and environment variable overrides, with
//! the file locations, listener wiring and report format as the settings.

pub mod loader;

pub use loader::{Config, ConfigError, NotifyConfig, OutputConfig, RunConfig};
