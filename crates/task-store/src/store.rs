use crate::atomic::AtomicFile;
use crate::error::StoreError;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use task_core::Task;
use tracing::debug;

pub const DEFAULT_FILE_NAME: &str = "tasks.json";

/// The task collection on disk: a single JSON array, replaced whole on every save.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection.
    ///
    /// A missing file is created holding an empty array. A file with only
    /// whitespace reads as empty. Anything that is not a JSON array of tasks
    /// with distinct ids is reported as corrupt and left as it is.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "storage file missing, creating it");
                self.save(&[])?;
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(self.corrupt(e.to_string()));
            }
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };

        if data.trim().is_empty() {
            debug!(path = %self.path.display(), "storage file is empty");
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&data).map_err(|e| self.corrupt(e.to_string()))?;

        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(dup) = tasks.iter().find(|task| !seen.insert(task.id)) {
            return Err(self.corrupt(format!("duplicate task id {}", dup.id)));
        }
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Replace the collection on disk with `tasks`.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let bytes = encode(tasks)?;
        let mut file = AtomicFile::create(&self.path)?;
        file.write_all(&bytes)?;
        file.commit()?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn corrupt(&self, reason: String) -> StoreError {
        StoreError::CorruptStorage {
            path: self.path.display().to_string(),
            reason,
        }
    }
}

/// Pretty-printed JSON array with a trailing newline.
pub fn encode(tasks: &[Task]) -> Result<Vec<u8>, StoreError> {
    let mut bytes = serde_json::to_vec_pretty(tasks)?;
    bytes.push(b'\n');
    Ok(bytes)
}
