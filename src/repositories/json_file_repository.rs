use crate::error::{PersistenceError, PersistenceResult};
use crate::models::record::StoredRecord;
use crate::models::Record;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Book repository backed by a pretty-printed JSON file.
///
/// Saves write a sibling temporary file first and rename it over the target,
/// so an interrupted save never leaves a truncated book behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository storing the book at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl BookRepository for JsonFileRepository {
    fn save(&self, records: &[Record]) -> PersistenceResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
        }

        let json = serde_json::to_vec_pretty(records)?;
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.io_error(&temp, e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(&self.path, e));
        }

        info!(
            path = %self.path.display(),
            count = records.len(),
            "Address book saved"
        );
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Vec<Record>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!(path = %self.path.display(), "Saved address book is empty");
            return Ok(Vec::new());
        }

        let stored: Vec<StoredRecord> = serde_json::from_slice(&bytes)?;
        let records = stored
            .into_iter()
            .map(Record::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            path = %self.path.display(),
            count = records.len(),
            "Address book loaded"
        );
        Ok(records)
    }
}
