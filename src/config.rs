//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! Every variable is optional; the defaults match the documented behavior of running
//! the binary with no environment at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the persisted contact book, relative to the working directory.
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted contact book file
    pub contacts_file: PathBuf,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Path of the contact book file (default: "contacts.json")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let contacts_file = match env::var("CONTACTS_FILE") {
            Ok(val) => {
                // A set-but-empty path would silently target the working directory
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "CONTACTS_FILE".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => PathBuf::from(DEFAULT_CONTACTS_FILE),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            contacts_file,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            log_level: "error".to_string(),
        }
    }
}
