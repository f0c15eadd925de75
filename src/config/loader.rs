//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. Environment variables
//! 2. Explicit config file, or `calcheck.toml` in the working directory
//! 3. `~/.config/calcheck/config.toml` (global defaults)
//! 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_ANSWER_MARKER, ENV_ANSWERS, ENV_CHECKER,
    ENV_EXPRESSIONS, ENV_FORMAT, ENV_RESULTS,
};
use crate::env::Env;
use crate::models::OutputFormat;
use crate::notify::{Channel, ListenerKind, Notifications};
use crate::pipeline::Paths;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("config file {} does not exist", .path.display())]
    Missing { path: PathBuf },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub notify: NotifyConfig,
    pub output: OutputConfig,
    pub run: RunConfig,
}

/// Listener wiring per notification channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Listeners for file access problems and phase aborts.
    pub general: Vec<ListenerKind>,
    /// Listeners for per-expression failures.
    pub calculation: Vec<ListenerKind>,
    /// Text the answer marker writes in place of a failed answer.
    pub marker: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            general: vec![ListenerKind::Console],
            calculation: vec![ListenerKind::Console],
            marker: DEFAULT_ANSWER_MARKER.to_string(),
        }
    }
}

impl NotifyConfig {
    /// Build the listener registry this config describes.
    pub fn build(&self, answers: &Path) -> Notifications {
        let mut notifications = Notifications::new();
        for (channel, kinds) in [
            (Channel::General, &self.general),
            (Channel::Calculation, &self.calculation),
        ] {
            for kind in kinds {
                notifications.subscribe_boxed(channel, kind.build(answers, &self.marker));
            }
        }
        notifications
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Exit-status policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Exit non-zero when the comparison found mismatches.
    pub fail_on_mismatch: bool,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` names a config file that must exist; without it,
    /// `calcheck.toml` in `work_dir` is used when present.
    pub fn load(explicit: Option<&Path>, work_dir: &Path, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Missing {
                        path: path.to_path_buf(),
                    });
                }
                let local = Self::load_file(path)?;
                config.merge(local);
            }
            None => {
                let local_path = work_dir.join(CONFIG_FILENAME);
                if local_path.exists() {
                    let local = Self::load_file(&local_path)?;
                    config.merge(local);
                }
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_paths = Paths::default();
        if other.paths.expressions != default_paths.expressions {
            self.paths.expressions = other.paths.expressions;
        }
        if other.paths.checker != default_paths.checker {
            self.paths.checker = other.paths.checker;
        }
        if other.paths.answers != default_paths.answers {
            self.paths.answers = other.paths.answers;
        }
        if other.paths.results != default_paths.results {
            self.paths.results = other.paths.results;
        }

        let default_notify = NotifyConfig::default();
        if other.notify.general != default_notify.general {
            self.notify.general = other.notify.general;
        }
        if other.notify.calculation != default_notify.calculation {
            self.notify.calculation = other.notify.calculation;
        }
        if other.notify.marker != default_notify.marker {
            self.notify.marker = other.notify.marker;
        }

        if other.output.format != OutputFormat::default() {
            self.output.format = other.output.format;
        }

        if other.run.fail_on_mismatch {
            self.run.fail_on_mismatch = true;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_EXPRESSIONS) {
            self.paths.expressions = PathBuf::from(val);
        }
        if let Ok(val) = env.var(ENV_CHECKER) {
            self.paths.checker = PathBuf::from(val);
        }
        if let Ok(val) = env.var(ENV_ANSWERS) {
            self.paths.answers = PathBuf::from(val);
        }
        if let Ok(val) = env.var(ENV_RESULTS) {
            self.paths.results = PathBuf::from(val);
        }
        if let Ok(val) = env.var(ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => tracing::warn!("ignoring invalid {ENV_FORMAT} value: {val}"),
            }
        }
    }
}
