use contact_book::error::{PersistenceError, PersistenceResult};
use contact_book::models::Record;
use contact_book::repositories::BookRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the saved records in memory, can be told to fail saves, and tracks
/// method calls for verification. Clones share state, so a test can keep one
/// handle while the shell owns another.
#[derive(Clone, Default)]
pub struct MockBookRepository {
    records: Arc<Mutex<Vec<Record>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let repo = Self::new();
        *repo.records.lock().unwrap() = records;
        repo
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Records from the last successful save.
    pub fn saved(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn save(&self, records: &[Record]) -> PersistenceResult<()> {
        self.increment_call_count("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(PersistenceError::Io {
                path: "mock".to_string(),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            });
        }
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Vec<Record>> {
        self.increment_call_count("load");
        Ok(self.records.lock().unwrap().clone())
    }
}
