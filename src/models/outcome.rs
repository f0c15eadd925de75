//! Comparison verdicts and per-phase summaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{VERDICT_ERROR, VERDICT_OK};

/// Outcome of comparing one answer line with its checker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Ok,
    Error,
}

impl Verdict {
    /// `Ok` when the two lines are textually identical.
    pub fn of(answer: &str, expected: &str) -> Self {
        if answer == expected {
            Verdict::Ok
        } else {
            Verdict::Error
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => f.write_str(VERDICT_OK),
            Verdict::Error => f.write_str(VERDICT_ERROR),
        }
    }
}

/// Result of the reset phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetSummary {
    /// Paths left existing and empty.
    pub cleared: usize,
    /// Paths that could not be truncated or created.
    pub failed: usize,
}

/// Result of the evaluate phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Answer lines written.
    pub evaluated: usize,
    /// Lines reported on the calculation channel instead of answered.
    pub failed: usize,
}

impl EvaluationSummary {
    /// Total expression lines read.
    pub fn lines(&self) -> usize {
        self.evaluated + self.failed
    }
}

/// Result of the compare phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Pairs compared.
    pub compared: usize,
    /// Pairs that differed.
    pub mismatches: usize,
}

impl ComparisonSummary {
    /// Tally a list of verdicts.
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        Self {
            compared: verdicts.len(),
            mismatches: verdicts.iter().filter(|v| **v == Verdict::Error).count(),
        }
    }

    pub fn passed(&self) -> usize {
        self.compared - self.mismatches
    }
}
