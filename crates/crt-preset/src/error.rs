//! Error types for preset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for preset operations.
pub type PresetResult<T> = Result<T, PresetError>;

/// Errors that can occur while loading or writing presets.
#[derive(Debug, Error)]
pub enum PresetError {
    /// I/O error reading or writing a preset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Preset file not found.
    #[error("preset file not found: {path}")]
    NotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// File extension does not map to a known preset format.
    #[error("unsupported preset format: {extension}")]
    UnsupportedFormat {
        /// Extension of the offending file.
        extension: String,
    },

    /// Malformed line in a key/value preset.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Key not recognized in strict mode.
    #[error("unknown parameter '{key}' at line {line}")]
    UnknownKey {
        /// The unrecognized key.
        key: String,
        /// 1-based line number.
        line: usize,
    },

    /// Value could not be converted to the parameter's type.
    #[error("invalid value '{value}' for parameter '{key}'")]
    InvalidValue {
        /// Parameter name.
        key: String,
        /// Raw value text.
        value: String,
    },
}

impl PresetError {
    /// Creates a [`PresetError::Parse`] error.
    #[inline]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates a [`PresetError::InvalidValue`] error.
    #[inline]
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}
