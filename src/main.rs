//! calcheck: evaluate an expressions file and check the answers.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calcheck::config::Config;
use calcheck::constants;
use calcheck::env::Env;
use calcheck::operators::OperatorTable;
use calcheck::output;
use calcheck::pipeline::Pipeline;
use cli::args::Cli;

fn main() {
    init_tracing();

    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `CALCHECK_LOG` (default `warn`).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    let work_dir = std::env::current_dir().context("failed to determine working directory")?;
    let config = Config::load(cli.config.as_deref(), &work_dir, &Env::real())
        .context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let table = OperatorTable::standard();
    let notifications = config.notify.build(&config.paths.answers);
    let mut pipeline = Pipeline::new(&table, config.paths.clone(), notifications);

    let report = pipeline.run();
    print!("{}", output::render(config.output.format, &report));

    Ok(report.exit_code(config.run.fail_on_mismatch))
}
