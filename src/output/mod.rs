//! Output renderers for the run report: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::OutputFormat;
use crate::pipeline::RunReport;

/// Trait for rendering a run report to an output format.
pub trait OutputRenderer {
    /// Render the report to a string.
    fn render(&self, report: &RunReport) -> String;
}

/// Render `report` with the renderer for `format`.
pub fn render(format: OutputFormat, report: &RunReport) -> String {
    match format {
        OutputFormat::Terminal => terminal::TerminalRenderer.render(report),
        OutputFormat::Json => json::JsonRenderer.render(report),
    }
}
