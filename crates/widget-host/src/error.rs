//! Error types for widget-host

use std::path::PathBuf;

/// Result type for host operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by host capabilities
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("Resource is not a file: {path}")]
    NotAFile { path: String },

    #[error("Unsupported text encoding: {encoding}")]
    UnsupportedEncoding { encoding: String },

    #[error("Content of {path} is not valid {encoding}")]
    Decode { path: String, encoding: String },

    #[error("Invalid locale: {value}")]
    InvalidLocale { value: String },

    #[error("Failed to parse host manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::ResourceNotFound { path: path.into() }
    }
}
