//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving the contact book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Contacts file exists but could not be read
    #[error("Failed to read contacts file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Contacts file content is not a valid contact book
    #[error("Could not decode contacts file {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Contact book could not be serialized
    #[error("Failed to encode contact book: {0}")]
    Encode(#[source] serde_json::Error),

    /// Contacts file could not be written or replaced
    #[error("Failed to write contacts file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Blocking I/O task failed to complete
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
