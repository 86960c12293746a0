use std::path::PathBuf;

/// Result type alias for result-printer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for result-printer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A suite in the results collection has no entry in the run statistics.
    #[error("No statistics recorded for suite '{0}'")]
    MissingSuiteStats(String),

    /// File not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid configuration value.
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidConfig { field: String, value: String },

    /// Write or read failure on the underlying stream, passed through untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing suite statistics error.
    pub fn missing_suite_stats(suite: impl Into<String>) -> Self {
        Error::MissingSuiteStats(suite.into())
    }

    /// Create an invalid configuration value error.
    pub fn invalid_config(field: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(
            Error::missing_suite_stats("math").to_string(),
            "No statistics recorded for suite 'math'"
        );
        assert_eq!(
            Error::invalid_config("color", "sometimes").to_string(),
            "Invalid configuration value for color: sometimes"
        );
    }

    #[test]
    fn test_error_file_not_found() {
        let err = Error::FileNotFound(PathBuf::from("/missing/results.json"));
        assert_eq!(err.to_string(), "File not found: /missing/results.json");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "pipe closed");
        assert!(err.source().is_none());
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
