use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] task_core::error::CoreError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task not found: {0}")]
    TaskNotFound(u64),

    #[error("no task id left after {0}")]
    IdSpaceExhausted(u64),

    #[error("storage file {path} is corrupt: {reason}")]
    CorruptStorage { path: String, reason: String },

    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    DirCreateFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Bad user input: description, status or id.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Core(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_))
    }
}
