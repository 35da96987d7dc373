use async_trait::async_trait;
use contact_book::error::{StorageError, StorageResult};
use contact_book::models::ContactBook;
use contact_book::storage::ContactStore;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps the "persisted" book in memory, tracks method calls for
/// verification, and can be switched to fail loads or saves for
/// error-path tests. Clones share state, so tests can hold a handle
/// while the code under test owns another.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    book: Arc<Mutex<ContactBook>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_save: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self {
            book: Arc::new(Mutex::new(ContactBook::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_load: Arc::new(Mutex::new(false)),
            fail_save: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed the "persisted" book for load tests.
    pub fn set_book(&self, book: ContactBook) {
        *self.book.lock().unwrap() = book;
    }

    /// Snapshot of the currently "persisted" book.
    pub fn saved_book(&self) -> ContactBook {
        self.book.lock().unwrap().clone()
    }

    /// Make every subsequent load fail with a read error.
    pub fn set_load_failure(&self, fail: bool) {
        *self.fail_load.lock().unwrap() = fail;
    }

    /// Make every subsequent save fail with a write error.
    pub fn set_save_failure(&self, fail: bool) {
        *self.fail_save.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn load(&self) -> StorageResult<ContactBook> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::Read {
                path: PathBuf::from("mock.json"),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "mock load failure",
                ),
            });
        }

        Ok(self.book.lock().unwrap().clone())
    }

    async fn save(&self, contacts: &ContactBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_save.lock().unwrap() {
            return Err(StorageError::Write {
                path: PathBuf::from("mock.json"),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "mock save failure",
                ),
            });
        }

        *self.book.lock().unwrap() = contacts.clone();
        Ok(())
    }
}
