//! App-wide constants.
//!
//! Centralises the tool name, config paths, default file locations and
//! environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calcheck";

/// Crate version as declared in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "calcheck.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "calcheck";

// ── Default file locations ──────────────────────────────────────────

pub const DEFAULT_EXPRESSIONS_PATH: &str = "expressions.txt";
pub const DEFAULT_CHECKER_PATH: &str = "expressions_checker.txt";
pub const DEFAULT_ANSWERS_PATH: &str = "answers.txt";
pub const DEFAULT_RESULTS_PATH: &str = "results.txt";

/// Text written in place of an answer by the answer marker listener.
pub const DEFAULT_ANSWER_MARKER: &str = "ERROR";

/// Number of fractional digits in every answer line.
pub const ANSWER_PRECISION: usize = 3;

// ── Results file verdicts ───────────────────────────────────────────

pub const VERDICT_OK: &str = "OK";
pub const VERDICT_ERROR: &str = "Error";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_EXPRESSIONS: &str = "CALCHECK_EXPRESSIONS";
pub const ENV_CHECKER: &str = "CALCHECK_CHECKER";
pub const ENV_ANSWERS: &str = "CALCHECK_ANSWERS";
pub const ENV_RESULTS: &str = "CALCHECK_RESULTS";
pub const ENV_FORMAT: &str = "CALCHECK_FORMAT";

/// Log filter directive for the tracing subscriber (e.g. `debug`, `calcheck=info`).
pub const ENV_LOG: &str = "CALCHECK_LOG";
