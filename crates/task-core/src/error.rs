use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("description must be between {min} and {max} characters after trimming (got {len})")]
    InvalidDescription { len: usize, min: usize, max: usize },

    #[error("invalid status '{0}': expected one of todo, in-progress, done")]
    InvalidStatus(String),

    #[error("invalid task id '{0}': expected a positive integer")]
    InvalidId(String),
}
