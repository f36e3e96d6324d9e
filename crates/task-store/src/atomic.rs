use crate::error::StoreError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, PersistError};
use tracing::warn;

/// Atomic replacement of a target file.
///
/// Data is written to a temporary file in the target's directory and renamed
/// over the target on commit. The temporary file is removed if the writer is
/// dropped without committing, or if the rename fails.
pub struct AtomicFile {
    target: PathBuf,
    temp: NamedTempFile,
}

impl AtomicFile {
    /// Start a replacement of `target`, creating its parent directory if needed.
    pub fn create(target: impl AsRef<Path>) -> Result<Self, StoreError> {
        let target = target.as_ref().to_path_buf();
        let dir = parent_dir(&target);

        if !dir.is_dir() {
            fs::create_dir_all(dir).map_err(|source| StoreError::DirCreateFailed {
                path: dir.display().to_string(),
                source,
            })?;
        }

        let prefix = format!(
            ".{}.",
            target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "tasks".to_string())
        );
        let temp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|source| StoreError::WriteFailed {
                path: target.display().to_string(),
                source,
            })?;

        Ok(Self { target, temp })
    }

    /// Path of the temporary file backing this write.
    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Write data to the temporary file.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), StoreError> {
        let result = self
            .temp
            .write_all(data)
            .and_then(|()| self.temp.flush())
            .and_then(|()| self.temp.as_file().sync_all());
        result.map_err(|source| StoreError::WriteFailed {
            path: self.temp.path().display().to_string(),
            source,
        })
    }

    /// Atomically commit: rename the temporary file over the target.
    pub fn commit(self) -> Result<(), StoreError> {
        match self.temp.persist(&self.target) {
            Ok(_) => Ok(()),
            Err(PersistError { error, file }) => {
                let temp_path = file.path().display().to_string();
                if let Err(e) = file.close() {
                    warn!(path = %temp_path, error = %e, "failed to remove temporary file");
                }
                Err(StoreError::WriteFailed {
                    path: self.target.display().to_string(),
                    source: error,
                })
            }
        }
    }
}

/// Directory that holds `target`; a bare file name lives in the current directory.
fn parent_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
