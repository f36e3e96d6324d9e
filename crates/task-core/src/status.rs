use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a task. Stored as `todo`, `in_progress` or `done`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// The token used in the storage file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a user-supplied status token.
///
/// Matching ignores surrounding whitespace and case, and the CLI spelling
/// `in-progress` is accepted alongside the stored `in_progress`.
impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let token = if normalized == "in-progress" {
            "in_progress"
        } else {
            normalized.as_str()
        };
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == token)
            .ok_or_else(|| CoreError::InvalidStatus(s.to_string()))
    }
}
