//! Answer marker: keeps the answers file aligned with the expressions file.
//!
//! Subscribed to the calculation channel, it appends a literal marker line to
//! the answers file for every failed expression, so the row that would have
//! held the answer still exists and the compare phase reports it as `Error`
//! instead of shifting every later row.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Channel, Listener};

/// Appends `marker` to the answers file on every message.
#[derive(Debug, Clone)]
pub struct AnswerMarker {
    path: PathBuf,
    marker: String,
}

impl AnswerMarker {
    pub fn new(path: impl AsRef<Path>, marker: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            marker: marker.into(),
        }
    }

    fn append(&self) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", self.marker)
    }
}

impl Listener for AnswerMarker {
    fn notify(&mut self, channel: Channel, _message: &str) {
        if let Err(e) = self.append() {
            tracing::warn!(
                %channel,
                path = %self.path.display(),
                "failed to write answer marker: {e}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_marker_per_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.txt");
        std::fs::write(&path, "3.000\n").unwrap();

        let mut marker = AnswerMarker::new(&path, "ERROR");
        marker.notify(Channel::Calculation, "line 2: division by zero");
        marker.notify(Channel::Calculation, "line 3: unknown operator");

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "3.000\nERROR\nERROR\n"
        );
    }

    #[test]
    fn unwritable_path_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let mut marker = AnswerMarker::new(dir.path().join("missing/answers.txt"), "ERROR");
        marker.notify(Channel::Calculation, "line 1: division by zero");
        assert!(!dir.path().join("missing").exists());
    }
}
