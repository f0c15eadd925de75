//! File pipeline: reset the outputs, evaluate every expression, compare the
//! answers with the checker file.
//!
//! Each phase runs once per [`Pipeline::run`]. Recoverable problems (one bad
//! path, one bad expression) are reported through [`Notifications`] and the
//! phase carries on. A phase that cannot open or read a required file aborts,
//! gets reported on the general channel, and the next phase still runs.

pub mod compare;
pub mod evaluate;
pub mod reset;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_ANSWERS_PATH, DEFAULT_CHECKER_PATH, DEFAULT_EXPRESSIONS_PATH, DEFAULT_RESULTS_PATH,
};
use crate::models::{ComparisonSummary, EvaluationSummary, ResetSummary};
use crate::notify::{Notifications, Notifier};
use crate::operators::OperatorTable;

pub use compare::compare_lines;

/// Errors that abort a single phase.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("cannot access {}: {} ({})", .path.display(), access_label(.source), .source)]
    FileAccess {
        path: PathBuf,
        source: io::Error,
    },

    #[error("cannot compare: element-count mismatch, {answers} vs {checker}")]
    LengthMismatch { answers: usize, checker: usize },
}

impl PipelineError {
    pub(crate) fn file_access(path: &Path, source: io::Error) -> Self {
        PipelineError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Short classification of an I/O failure for messages.
fn access_label(err: &io::Error) -> &'static str {
    match err.kind() {
        io::ErrorKind::NotFound => "file not found",
        io::ErrorKind::PermissionDenied => "permission denied",
        _ => "input/output error",
    }
}

/// Locations of the four files the pipeline touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Input: one expression per line.
    pub expressions: PathBuf,
    /// Input: expected answers, one per expression.
    pub checker: PathBuf,
    /// Output: computed answers.
    pub answers: PathBuf,
    /// Output: per-line verdicts and the mismatch count.
    pub results: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            expressions: PathBuf::from(DEFAULT_EXPRESSIONS_PATH),
            checker: PathBuf::from(DEFAULT_CHECKER_PATH),
            answers: PathBuf::from(DEFAULT_ANSWERS_PATH),
            results: PathBuf::from(DEFAULT_RESULTS_PATH),
        }
    }
}

impl Paths {
    /// Resolve every relative path against `base`.
    pub fn relative_to(&self, base: &Path) -> Self {
        Self {
            expressions: base.join(&self.expressions),
            checker: base.join(&self.checker),
            answers: base.join(&self.answers),
            results: base.join(&self.results),
        }
    }
}

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Reset,
    Evaluate,
    Compare,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Reset => write!(f, "reset"),
            Phase::Evaluate => write!(f, "evaluate"),
            Phase::Compare => write!(f, "compare"),
            Phase::Done => write!(f, "done"),
        }
    }
}

/// Outcome of a phase that can abort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseOutcome<T> {
    Completed(T),
    Aborted(String),
}

impl<T> PhaseOutcome<T> {
    pub fn completed(&self) -> Option<&T> {
        match self {
            PhaseOutcome::Completed(summary) => Some(summary),
            PhaseOutcome::Aborted(_) => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, PhaseOutcome::Aborted(_))
    }
}

impl<T> From<Result<T, PipelineError>> for PhaseOutcome<T> {
    fn from(result: Result<T, PipelineError>) -> Self {
        match result {
            Ok(summary) => PhaseOutcome::Completed(summary),
            Err(e) => PhaseOutcome::Aborted(e.to_string()),
        }
    }
}

/// Everything a full run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub reset: ResetSummary,
    pub evaluation: PhaseOutcome<EvaluationSummary>,
    pub comparison: PhaseOutcome<ComparisonSummary>,
}

impl RunReport {
    /// Number of phases that aborted.
    pub fn aborted_phases(&self) -> usize {
        usize::from(self.evaluation.is_aborted()) + usize::from(self.comparison.is_aborted())
    }

    /// Mismatch count, if the compare phase completed.
    pub fn mismatches(&self) -> Option<usize> {
        self.comparison.completed().map(|c| c.mismatches)
    }

    /// Process exit status: 1 when a phase aborted, or when mismatches were
    /// found and `fail_on_mismatch` is set; 0 otherwise.
    pub fn exit_code(&self, fail_on_mismatch: bool) -> i32 {
        if self.aborted_phases() > 0 {
            return 1;
        }
        match self.mismatches() {
            Some(n) if n > 0 && fail_on_mismatch => 1,
            _ => 0,
        }
    }
}

/// Runs the reset, evaluate and compare phases over a set of [`Paths`].
pub struct Pipeline<'a> {
    table: &'a OperatorTable,
    paths: Paths,
    notifications: Notifications,
    phase: Phase,
}

impl<'a> Pipeline<'a> {
    pub fn new(table: &'a OperatorTable, paths: Paths, notifications: Notifications) -> Self {
        Self {
            table,
            paths,
            notifications,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Run `Reset -> Evaluate -> Compare` once each.
    ///
    /// Reset clears the two output files. An aborted phase is recorded in the
    /// report and does not stop the phases after it.
    pub fn run(&mut self) -> RunReport {
        let paths = self.paths.clone();

        self.enter(Phase::Reset);
        let reset = self.reset(&[&paths.answers, &paths.results]);

        self.enter(Phase::Evaluate);
        let evaluation = PhaseOutcome::from(self.evaluate_all(&paths.expressions, &paths.answers));

        self.enter(Phase::Compare);
        let comparison =
            PhaseOutcome::from(self.compare(&paths.answers, &paths.checker, &paths.results));

        self.enter(Phase::Done);
        let report = RunReport {
            reset,
            evaluation,
            comparison,
        };
        tracing::info!(
            aborted = report.aborted_phases(),
            mismatches = ?report.mismatches(),
            "run finished"
        );
        report
    }

    fn enter(&mut self, next: Phase) {
        tracing::debug!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
    }

    /// Report a phase abort on the general channel and hand the error back.
    fn reported<T>(&mut self, result: Result<T, PipelineError>) -> Result<T, PipelineError> {
        if let Err(ref e) = result {
            tracing::debug!(phase = %self.phase, "phase aborted: {e}");
            self.notifications.general(&e.to_string());
        }
        result
    }
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("paths", &self.paths)
            .field("phase", &self.phase)
            .field("notifications", &self.notifications)
            .finish()
    }
}
