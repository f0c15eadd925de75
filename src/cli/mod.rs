//! CLI definition.
//!
//! The tool takes no flags: everything it needs comes from configuration.
//! The only argument is an optional path to a config file.

pub mod args;
