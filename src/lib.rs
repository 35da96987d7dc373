//! Contact Book - an interactive, JSON-backed contact book for the terminal.
//!
//! This library implements a single-user contact book: add, search, update,
//! and delete name/phone/email records, persisted to a pretty-printed JSON
//! file after every successful mutation.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, emails)
//! - **models**: The stored data model (Contact, ContactBook)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **storage**: The ContactStore seam and the JSON file store
//! - **console**: The prompt/print seam and the terminal console
//! - **ops**: Interactive add/search/update/delete flows
//! - **menu**: The numbered menu loop driving the session

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod menu;
pub mod models;
pub mod ops;
pub mod storage;

pub use config::Config;
pub use console::{Console, StdioConsole};
pub use domain::{ContactName, EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, StorageError};
pub use menu::MenuLoop;
pub use models::{Contact, ContactBook};
pub use ops::{ContactOps, Flow};
pub use storage::{ContactStore, JsonFileStore};
