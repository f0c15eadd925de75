//! Compare phase: answers vs. checker, one verdict per row plus a count.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::{Pipeline, PipelineError};
use crate::models::{ComparisonSummary, Verdict};

/// Compare two row sequences position by position.
///
/// Fails with [`PipelineError::LengthMismatch`] when the lengths differ;
/// no row is compared in that case.
pub fn compare_lines<A, C>(
    answers: &[A],
    checker: &[C],
) -> Result<(Vec<Verdict>, ComparisonSummary), PipelineError>
where
    A: AsRef<str>,
    C: AsRef<str>,
{
    if answers.len() != checker.len() {
        return Err(PipelineError::LengthMismatch {
            answers: answers.len(),
            checker: checker.len(),
        });
    }

    let verdicts: Vec<Verdict> = answers
        .iter()
        .zip(checker)
        .map(|(a, c)| Verdict::of(a.as_ref(), c.as_ref()))
        .collect();
    let summary = ComparisonSummary::from_verdicts(&verdicts);
    Ok((verdicts, summary))
}

fn read_lines(path: &Path) -> Result<Vec<String>, PipelineError> {
    let file = File::open(path).map_err(|e| PipelineError::file_access(path, e))?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| PipelineError::file_access(path, e))
}

impl Pipeline<'_> {
    /// Compare `answers` with `checker` and append the verdicts to `results`.
    ///
    /// On a length mismatch a single diagnostic goes to the general channel and
    /// `results` is not touched.
    pub fn compare(
        &mut self,
        answers: &Path,
        checker: &Path,
        results: &Path,
    ) -> Result<ComparisonSummary, PipelineError> {
        let result = Self::try_compare(answers, checker, results);
        self.reported(result)
    }

    fn try_compare(
        answers: &Path,
        checker: &Path,
        results: &Path,
    ) -> Result<ComparisonSummary, PipelineError> {
        let checks = read_lines(checker)?;
        let answered = read_lines(answers)?;

        let (verdicts, summary) = compare_lines(&answered, &checks)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(results)
            .map_err(|e| PipelineError::file_access(results, e))?;
        let mut writer = BufWriter::new(file);
        let write_err = |e| PipelineError::file_access(results, e);

        for verdict in &verdicts {
            writeln!(writer, "{verdict}").map_err(write_err)?;
        }
        writeln!(writer, "{}", summary.mismatches).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        tracing::info!(
            compared = summary.compared,
            mismatches = summary.mismatches,
            "answers compared"
        );
        Ok(summary)
    }
}
