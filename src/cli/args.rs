//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

/// Evaluate arithmetic expressions and check the answers against an expected-results file.
#[derive(Parser, Debug)]
#[command(name = calcheck::constants::APP_NAME, version = calcheck::constants::VERSION)]
pub struct Cli {
    /// Config file to use instead of `calcheck.toml` in the working directory.
    pub config: Option<PathBuf>,
}
