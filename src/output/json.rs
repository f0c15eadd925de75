//! JSON output renderer.
//!
//! Outputs `{"reset": {...}, "evaluation": {...}, "comparison": {...}, "ok": bool}`.

use crate::output::OutputRenderer;
use crate::pipeline::RunReport;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &RunReport) -> String {
        let output = serde_json::json!({
            "reset": report.reset,
            "evaluation": report.evaluation,
            "comparison": report.comparison,
            "ok": report.aborted_phases() == 0 && report.mismatches() == Some(0),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComparisonSummary, EvaluationSummary, ResetSummary};
    use crate::pipeline::PhaseOutcome;

    #[test]
    fn render_completed_run() {
        let report = RunReport {
            reset: ResetSummary { cleared: 2, failed: 0 },
            evaluation: PhaseOutcome::Completed(EvaluationSummary {
                evaluated: 3,
                failed: 1,
            }),
            comparison: PhaseOutcome::Completed(ComparisonSummary {
                compared: 3,
                mismatches: 0,
            }),
        };

        let parsed: serde_json::Value = serde_json::from_str(&JsonRenderer.render(&report)).unwrap();

        assert_eq!(parsed["reset"]["cleared"], 2);
        assert_eq!(parsed["evaluation"]["completed"]["failed"], 1);
        assert_eq!(parsed["comparison"]["completed"]["mismatches"], 0);
        assert_eq!(parsed["ok"], true);
    }

    #[test]
    fn render_aborted_comparison() {
        let report = RunReport {
            reset: ResetSummary::default(),
            evaluation: PhaseOutcome::Completed(EvaluationSummary::default()),
            comparison: PhaseOutcome::Aborted(
                "cannot compare: element-count mismatch, 3 vs 2".into(),
            ),
        };

        let parsed: serde_json::Value = serde_json::from_str(&JsonRenderer.render(&report)).unwrap();

        assert_eq!(
            parsed["comparison"]["aborted"],
            "cannot compare: element-count mismatch, 3 vs 2"
        );
        assert_eq!(parsed["ok"], false);
    }
}
