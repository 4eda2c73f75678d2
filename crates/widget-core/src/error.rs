//! Error types for widget-core

/// Result type for widget-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving a widget configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable configuration was supplied at instantiation
    #[error("Widget configuration is either missing or not parseable as JSON.")]
    ConfigMissing,

    /// Configuration text is not a JSON object
    #[error("Configuration is not a valid JSON object: {message}")]
    ConfigParse { message: String },

    /// A path in the configuration does not name an existing plain-text file
    #[error("The configuration references a {purpose} at '{path}', but no such file exists.")]
    FileNotFound { purpose: String, path: String },

    /// A recognized key holds a value of the wrong shape
    #[error("Configuration key '{key}' must be {expected}")]
    InvalidValue { key: String, expected: String },

    /// A `__PROP[...]` notation names a property the host does not define
    #[error(
        "Dynamic value referenced non-existing property '{name}'. Please define this property before referencing it."
    )]
    UndefinedProperty { name: String },

    /// A `__NOW[...]` pattern could not be interpreted
    #[error("Invalid date format '{pattern}': {message}")]
    DateFormat { pattern: String, message: String },

    /// Host capability error
    #[error(transparent)]
    Host(#[from] widget_host::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn file_not_found(purpose: impl Into<String>, path: impl Into<String>) -> Self {
        Self::FileNotFound {
            purpose: purpose.into(),
            path: path.into(),
        }
    }

    pub fn date_format(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DateFormat {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
