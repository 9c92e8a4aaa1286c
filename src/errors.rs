//! Typed failures raised while ingesting an archive.
//!
//! Both variants abort the whole load: a malformed archive is rejected wholesale rather
//! than rendered as a partial tree. Orphaned posts are not errors and are reported on
//! [`crate::tree::ThreadTree`] instead.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A line of the archive is not valid JSON
    #[error("Couldn't parse JSON on line {line}.")]
    Syntax {
        /// 1-based line number
        line: usize,
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON record lacks a required field or has one of the wrong shape
    #[error("{}", missing_field_message(.id.as_deref()))]
    MissingField {
        id: Option<String>,
        record: Value,
        #[source]
        source: serde_json::Error,
    },
}

fn missing_field_message(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("Post with id {} parses but is missing a field.", id),
        None => "Post without an id is missing a field.".to_string(),
    }
}

impl ArchiveError {
    /// Short message suitable for showing to a user
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Write the offending input and the underlying parser error to the log sink
    pub fn log_details(&self) {
        match self {
            ArchiveError::Syntax { line, raw, source } => {
                tracing::error!(line = *line, raw = %raw, error = %source, "{}", self);
            }
            ArchiveError::MissingField { id, record, source } => {
                tracing::error!(
                    id = id.as_deref().unwrap_or("<unknown>"),
                    record = %record,
                    error = %source,
                    "{}",
                    self
                );
            }
        }
    }
}
