//! Shared types used across all modules.
//!
//! Expressions, answer formatting, comparison verdicts and the per-phase
//! summaries live here so the evaluator, pipeline and renderers agree on
//! one vocabulary.

pub mod expression;
pub mod outcome;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use expression::{Expression, format_answer};
pub use outcome::{ComparisonSummary, EvaluationSummary, ResetSummary, Verdict};

/// How the run report is printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_display() {
        assert_eq!(OutputFormat::Terminal.to_string(), "terminal");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn output_format_from_str_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "Terminal".parse::<OutputFormat>().unwrap(),
            OutputFormat::Terminal
        );
    }

    #[test]
    fn output_format_from_str_invalid() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("unsupported output format"));
        assert!(err.contains("xml"));
    }

    #[test]
    fn output_format_serde_roundtrip() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        let back: OutputFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OutputFormat::Json);
    }
}
