//! calcheck: batch arithmetic evaluator and answer checker (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod evaluator;
pub mod models;
pub mod notify;
pub mod operators;
pub mod output;
pub mod pipeline;
