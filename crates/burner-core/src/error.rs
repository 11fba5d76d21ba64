//! Error types for burner-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Main error type for burner-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// List file could not be read
    #[error("List file error for '{path}': {message}")]
    ListFile {
        /// Path to the list file
        path: String,
        /// Error message
        message: String,
    },

    /// A list entry that can never act as a domain
    #[error("Invalid entry '{entry}' at line {line}: {message}")]
    InvalidEntry {
        /// The offending entry
        entry: String,
        /// Line number in the source (1-based)
        line: usize,
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing config file
        path: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigValue {
        /// Configuration key
        key: String,
        /// Error message
        message: String,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a list file error
    pub fn list_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ListFile {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid entry error
    pub fn invalid_entry(entry: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            entry: entry.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a config value error
    pub fn config_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
