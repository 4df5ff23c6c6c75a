//! Error types for natality

use natality_io::IoError;
use thiserror::Error;

/// Result type alias for natality operations
pub type Result<T> = std::result::Result<T, NatalityError>;

/// Main error type for natality operations
#[derive(Error, Debug)]
pub enum NatalityError {
    /// Reading or shaping the dataset failed
    #[error("Data error: {0}")]
    Io(#[from] IoError),

    /// Configuration is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A file could not be read
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A group has no usable observations
    #[error("No observations in {0}")]
    EmptyGroup(String),

    /// A discrete column holds a fractional or out-of-range value
    #[error("Column {column} has non-integral value {value}")]
    NonIntegral { column: String, value: f64 },
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A column name is empty
    #[error("Empty column name: {0}")]
    EmptyColumn(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}
