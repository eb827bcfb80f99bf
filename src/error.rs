// Error taxonomy shared by both pipelines.
//
// Load failures are fatal. Remote call failures are caught per record by the
// keyword pipeline and turned into an "Error: ..." marker. Scoring failures
// abort the overlap pipeline.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextbenchError {
    /// Source file missing, unreadable, or missing a required column.
    #[error("Dataset unavailable at {}: {reason}", .path.display())]
    DataUnavailable { path: PathBuf, reason: String },

    /// A chat-completion request failed (transport, status, or body).
    #[error("{0}")]
    RemoteCallFailure(String),

    /// Overlap scoring failed for a record. Aborts the overlap run.
    #[error("Scoring failed at row {row}: {reason}")]
    ScoringFailure { row: usize, reason: String },

    /// A column couldn't be read or appended.
    #[error("Column `{name}`: {reason}")]
    Column { name: String, reason: String },

    /// The enriched dataset could not be written out.
    #[error("Failed to export dataset: {0}")]
    Export(String),
}

impl TextbenchError {
    pub fn data_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// The marker written into a result column in place of a remote result.
    pub fn as_marker(&self) -> String {
        format!("Error: {self}")
    }
}

pub type Result<T> = std::result::Result<T, TextbenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_failure_marker_embeds_message() {
        let err = TextbenchError::RemoteCallFailure("rate limit exceeded".to_string());
        assert_eq!(err.as_marker(), "Error: rate limit exceeded");
    }

    #[test]
    fn test_data_unavailable_names_path() {
        let err = TextbenchError::data_unavailable("news.csv", "missing column `tags`");
        let msg = err.to_string();
        assert!(msg.contains("news.csv"));
        assert!(msg.contains("missing column `tags`"));
    }
}
