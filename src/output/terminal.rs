//! Terminal renderer: one styled line per phase and a closing verdict.

use colored::Colorize;

use crate::output::OutputRenderer;
use crate::pipeline::{PhaseOutcome, RunReport};

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl TerminalRenderer {
    fn aborted(name: &str, reason: &str) -> String {
        format!(" {} {:<10} {}\n", "✖".red().bold(), name, reason.red())
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, report: &RunReport) -> String {
        let mut output = String::new();

        let reset = &report.reset;
        let icon = if reset.failed == 0 {
            "✔".green().bold()
        } else {
            "⚠".yellow().bold()
        };
        output.push_str(&format!(
            " {} {:<10} {} cleared, {} failed\n",
            icon, "reset", reset.cleared, reset.failed
        ));

        match &report.evaluation {
            PhaseOutcome::Completed(s) => {
                let icon = if s.failed == 0 {
                    "✔".green().bold()
                } else {
                    "⚠".yellow().bold()
                };
                output.push_str(&format!(
                    " {} {:<10} {} of {} answered, {} skipped\n",
                    icon,
                    "evaluate",
                    s.evaluated,
                    s.lines(),
                    s.failed
                ));
            }
            PhaseOutcome::Aborted(reason) => output.push_str(&Self::aborted("evaluate", reason)),
        }

        match &report.comparison {
            PhaseOutcome::Completed(s) => {
                let icon = if s.mismatches == 0 {
                    "✔".green().bold()
                } else {
                    "✖".red().bold()
                };
                output.push_str(&format!(
                    " {} {:<10} {} compared, {} OK, {} {}\n",
                    icon,
                    "compare",
                    s.compared,
                    s.passed(),
                    s.mismatches,
                    if s.mismatches == 1 { "error" } else { "errors" },
                ));
            }
            PhaseOutcome::Aborted(reason) => output.push_str(&Self::aborted("compare", reason)),
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        let closing = match (report.aborted_phases(), report.mismatches()) {
            (0, Some(0)) => "All answers match.".green().bold(),
            (0, Some(n)) => format!("{n} answer(s) differ from the checker.").red().bold(),
            (n, _) => format!("{n} phase(s) aborted.").red().bold(),
        };
        output.push_str(&format!(" {closing}\n"));

        output
    }
}
