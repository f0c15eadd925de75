//! Reset phase: truncate or create output files.

use std::fs::File;
use std::path::Path;

use super::{Pipeline, PipelineError};
use crate::models::ResetSummary;
use crate::notify::Notifier;

impl Pipeline<'_> {
    /// Leave each path existing and empty.
    ///
    /// A path that cannot be created or truncated is reported on the general
    /// channel; the remaining paths are still processed.
    pub fn reset<P: AsRef<Path>>(&mut self, paths: &[P]) -> ResetSummary {
        let mut summary = ResetSummary::default();

        for path in paths {
            let path = path.as_ref();
            match File::create(path) {
                Ok(_) => {
                    tracing::debug!(path = %path.display(), "cleared");
                    summary.cleared += 1;
                }
                Err(e) => {
                    let err = PipelineError::file_access(path, e);
                    self.notifications.general(&err.to_string());
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
