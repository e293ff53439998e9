use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Keywords(#[from] keyword_histogram_core::CoreError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse keywords file '{path}': {message}")]
    KeywordsFile { path: PathBuf, message: String },

    #[error("No PDF files found under '{}'", root.display())]
    NoPdfFound { root: PathBuf },

    #[error("Directory '{}' does not exist or is not a directory", root.display())]
    RootNotFound { root: PathBuf },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to extract text from '{}': {message}", path.display())]
    Extraction { path: PathBuf, message: String },

    #[error("Failed to read file '{}': {cause}", path.display())]
    FileRead { path: PathBuf, cause: std::io::Error },

    #[error("Failed to write file '{}': {cause}", path.display())]
    FileWrite { path: PathBuf, cause: std::io::Error },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Chart rendering failed: {0}")]
    Chart(String),
}

impl EngineError {
    /// Errors that stop a run before any document is processed because the
    /// request itself is unusable.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Keywords(_) | Self::Config(_) | Self::KeywordsFile { .. })
    }

    #[must_use]
    pub const fn is_discovery(&self) -> bool {
        matches!(self, Self::NoPdfFound { .. } | Self::RootNotFound { .. } | Self::Walk(_))
    }

    #[must_use]
    pub const fn is_extraction(&self) -> bool {
        matches!(self, Self::Extraction { .. } | Self::FileRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn io_reason_is_reported_once() {
        let err = EngineError::FileRead {
            path: PathBuf::from("a.pdf"),
            cause: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Failed to read file 'a.pdf': gone");
        assert!(err.source().is_none());
    }

    #[test]
    fn keywords_file_problems_are_configuration_errors() {
        let err = EngineError::KeywordsFile {
            path: PathBuf::from("k.txt"),
            message: "No such file or directory".into(),
        };
        assert!(err.is_configuration());
        assert!(!err.is_extraction());
    }
}
