//! Evaluate phase: one answer line per successfully evaluated expression.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, LineWriter, Write};
use std::path::Path;

use super::{Pipeline, PipelineError};
use crate::evaluator::{EvalError, Evaluator};
use crate::models::{EvaluationSummary, format_answer};
use crate::notify::Notifier;

impl Pipeline<'_> {
    /// Evaluate every line of `expressions`, appending answers to `answers`.
    ///
    /// A failed expression writes nothing and is reported on the calculation
    /// channel as `line N: <error>`, as is a line that is not valid UTF-8.
    /// Failing to open or read the input, or to write the output, aborts the
    /// phase.
    pub fn evaluate_all(
        &mut self,
        expressions: &Path,
        answers: &Path,
    ) -> Result<EvaluationSummary, PipelineError> {
        let result = self.try_evaluate_all(expressions, answers);
        self.reported(result)
    }

    fn try_evaluate_all(
        &mut self,
        expressions: &Path,
        answers: &Path,
    ) -> Result<EvaluationSummary, PipelineError> {
        let input = File::open(expressions).map_err(|e| PipelineError::file_access(expressions, e))?;
        let output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(answers)
            .map_err(|e| PipelineError::file_access(answers, e))?;
        // Flushed per line, so anything a listener appends lands after it.
        let mut writer = LineWriter::new(output);

        let evaluator = Evaluator::new(self.table);
        let mut summary = EvaluationSummary::default();

        let mut reader = BufReader::new(input);
        let mut buf = Vec::new();
        let mut number = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| PipelineError::file_access(expressions, e))?;
            if read == 0 {
                break;
            }
            number += 1;

            match decode_line(&buf).and_then(|line| evaluator.evaluate(line)) {
                Ok(value) => {
                    writeln!(writer, "{}", format_answer(value))
                        .map_err(|e| PipelineError::file_access(answers, e))?;
                    summary.evaluated += 1;
                }
                Err(e) => {
                    tracing::debug!(line = number, "evaluation failed: {e}");
                    self.notifications.calculation(&format!("line {number}: {e}"));
                    summary.failed += 1;
                }
            }
        }

        writer
            .flush()
            .map_err(|e| PipelineError::file_access(answers, e))?;

        tracing::info!(
            evaluated = summary.evaluated,
            failed = summary.failed,
            "expressions evaluated"
        );
        Ok(summary)
    }
}

/// Strip the line ending and decode. Undecodable bytes make the line
/// malformed rather than failing the read.
fn decode_line(raw: &[u8]) -> Result<&str, EvalError> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(|e| EvalError::MalformedExpression {
        line: String::from_utf8_lossy(raw).into_owned(),
        reason: format!("not valid UTF-8: {e}"),
    })
}
