//! JSON-file-backed contact store.
//!
//! This module stores the whole contact book as one pretty-printed JSON
//! object. I/O is synchronous `std::fs`, run on the blocking thread pool via
//! `tokio::task::spawn_blocking` so the async runtime is never blocked.

use crate::error::{StorageError, StorageResult};
use crate::models::ContactBook;
use crate::storage::ContactStore;
use async_trait::async_trait;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Contact store backed by a single JSON file.
///
/// Every save rewrites the whole file. The write goes to a sibling temporary
/// file first and is renamed over the target, so an interrupted save cannot
/// truncate the previous contents.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file path.
    ///
    /// The file is only touched by `load` and `save`; it does not need to
    /// exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_sync(path: &Path) -> StorageResult<ContactBook> {
        if !path.exists() {
            tracing::debug!("No contacts file at {}, starting empty", path.display());
            return Ok(ContactBook::new());
        }

        let raw = fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let book: ContactBook =
            serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Loaded {} contacts from {}", book.len(), path.display());
        Ok(book)
    }

    fn write_sync(path: &Path, json: String) -> StorageResult<()> {
        // Sibling temp file keeps the rename on the same filesystem
        let mut tmp_name = path.file_name().map(OsString::from).unwrap_or_default();
        tmp_name.push(".tmp");
        let tmp = path.with_file_name(tmp_name);

        fs::write(&tmp, json).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Contact book written to {}", path.display());
        Ok(())
    }

    /// Serialize with 4-space indentation, the format the file has always
    /// used.
    fn encode(contacts: &ContactBook) -> StorageResult<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        contacts
            .serialize(&mut serializer)
            .map_err(StorageError::Encode)?;

        Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
    }
}

#[async_trait]
impl ContactStore for JsonFileStore {
    async fn load(&self) -> StorageResult<ContactBook> {
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || Self::read_sync(&path))
            .await
            .map_err(|e| StorageError::TaskJoin(e.to_string()))?
    }

    async fn save(&self, contacts: &ContactBook) -> StorageResult<()> {
        let json = Self::encode(contacts)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || Self::write_sync(&path, json))
            .await
            .map_err(|e| StorageError::TaskJoin(e.to_string()))?
    }
}
