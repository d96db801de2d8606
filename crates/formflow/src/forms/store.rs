use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use super::domain::Submission;

/// Storage abstraction so handlers and the service can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    /// Replaces the in-memory copy with the backing data; never fails.
    fn load(&self) -> Vec<Submission>;
    fn append(&self, submission: Submission) -> Result<(), StoreError>;
    /// Reloads before answering so external edits are picked up.
    fn list(&self) -> Vec<Submission>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode submissions: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Submissions kept in memory and mirrored to one pretty-printed JSON array.
///
/// Every append rewrites the whole file in place. Nothing guards the file against
/// other processes, so concurrent external writers race with last-writer-wins.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    submissions: Mutex<Vec<Submission>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Creates the store and runs an initial `load`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = Self::new(path);
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn records(&self) -> MutexGuard<'_, Vec<Submission>> {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_file(&self) -> Result<Option<Vec<Submission>>, ReadError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&raw)?))
    }

    fn write_file(&self, submissions: &[Submission]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(submissions)?;
        fs::write(&self.path, encoded).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl SubmissionRepository for JsonFileStore {
    fn load(&self) -> Vec<Submission> {
        let loaded = match self.read_file() {
            Ok(Some(records)) => records,
            Ok(None) => {
                debug!(path = %self.path.display(), "no submissions file yet");
                Vec::new()
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding unreadable submissions file");
                Vec::new()
            }
        };

        let mut guard = self.records();
        *guard = loaded.clone();
        loaded
    }

    fn append(&self, submission: Submission) -> Result<(), StoreError> {
        let mut guard = self.records();
        guard.push(submission);
        if let Err(err) = self.write_file(&guard) {
            guard.pop();
            return Err(err);
        }
        Ok(())
    }

    fn list(&self) -> Vec<Submission> {
        match self.read_file() {
            Ok(Some(records)) => {
                let mut guard = self.records();
                *guard = records.clone();
                records
            }
            Ok(None) => self.records().clone(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "keeping in-memory submissions; file unreadable");
                self.records().clone()
            }
        }
    }
}

/// Process-local repository for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    submissions: Mutex<Vec<Submission>>,
}

impl InMemoryStore {
    fn records(&self) -> MutexGuard<'_, Vec<Submission>> {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SubmissionRepository for InMemoryStore {
    fn load(&self) -> Vec<Submission> {
        self.records().clone()
    }

    fn append(&self, submission: Submission) -> Result<(), StoreError> {
        self.records().push(submission);
        Ok(())
    }

    fn list(&self) -> Vec<Submission> {
        self.records().clone()
    }
}
