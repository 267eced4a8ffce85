//! Error type shared by every ppinet crate.
//!
//! Library code returns [`PpiResult`]; the CLI wraps these with context.
//! Per-item fetch failures are not errors at this level: the batch driver
//! records them and moves on.

use std::io;

use thiserror::Error;

/// Result alias used across the workspace.
pub type PpiResult<T> = std::result::Result<T, PpiError>;

/// Errors raised by table processing, graph algorithms and API clients.
#[derive(Debug, Error)]
pub enum PpiError {
    /// A table is missing a column the operation requires.
    #[error("missing required column '{column}' in {table}")]
    MissingColumn {
        /// Table description (usually the file path).
        table: String,
        /// Name of the missing column.
        column: String,
    },

    /// An edge references an identifier absent from the node table.
    #[error("identifier '{identifier}' in edge row {row} is not in the node table")]
    UnmappedIdentifier {
        /// The unmapped external identifier.
        identifier: String,
        /// Zero-based data row of the offending edge.
        row: usize,
    },

    /// The node table lists the same identifier twice.
    #[error("duplicate identifier '{identifier}' in node table at row {row}")]
    DuplicateIdentifier {
        /// The repeated identifier.
        identifier: String,
        /// Zero-based data row of the second occurrence.
        row: usize,
    },

    /// One or more seed names have no node in the node table.
    #[error("seed names not found in node table: {}", names.join(", "))]
    UnknownSeeds {
        /// Every unresolved seed name, in input order.
        names: Vec<String>,
    },

    /// A field could not be parsed.
    #[error("parse error in {source_name} at row {row}: {message}")]
    Parse {
        /// File or stream the value came from.
        source_name: String,
        /// Zero-based data row.
        row: usize,
        /// What went wrong.
        message: String,
    },

    /// Caller-supplied input is invalid.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the problem.
        message: String,
    },

    /// JSON/TOML encoding or decoding failed.
    #[error("serialization error: {message}")]
    Serialization {
        /// Underlying serializer message.
        message: String,
    },

    /// An HTTP request failed or returned an unusable response.
    #[error("request to {url} failed: {message}")]
    Http {
        /// Request URL without query string.
        url: String,
        /// Status line or transport error.
        message: String,
    },

    /// Filesystem I/O failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or written.
        path: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl PpiError {
    /// Build an [`PpiError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PpiError::InvalidInput {
            message: message.into(),
        }
    }

    /// Build an [`PpiError::Serialization`].
    pub fn serialization(message: impl Into<String>) -> Self {
        PpiError::Serialization {
            message: message.into(),
        }
    }

    /// Build an [`PpiError::Parse`].
    pub fn parse(source_name: impl Into<String>, row: usize, message: impl Into<String>) -> Self {
        PpiError::Parse {
            source_name: source_name.into(),
            row,
            message: message.into(),
        }
    }

    /// Build an [`PpiError::MissingColumn`].
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        PpiError::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Build an [`PpiError::Http`].
    pub fn http(url: impl Into<String>, message: impl Into<String>) -> Self {
        PpiError::Http {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Build an [`PpiError::Io`] tagged with the path involved.
    pub fn io(path: impl AsRef<std::path::Path>, source: io::Error) -> Self {
        PpiError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl From<serde_json::Error> for PpiError {
    fn from(err: serde_json::Error) -> Self {
        PpiError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_seeds_lists_every_name() {
        let err = PpiError::UnknownSeeds {
            names: vec!["BRCA1".into(), "NOPE".into()],
        };
        assert_eq!(
            err.to_string(),
            "seed names not found in node table: BRCA1, NOPE"
        );
    }

    #[test]
    fn missing_column_message() {
        let err = PpiError::missing_column("edges.csv", "source");
        assert_eq!(
            err.to_string(),
            "missing required column 'source' in edges.csv"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        let err = PpiError::io(
            "/tmp/x.csv",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/tmp/x.csv"));
    }

    #[test]
    fn serde_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: PpiError = parse.unwrap_err().into();
        assert!(matches!(err, PpiError::Serialization { .. }));
    }
}
