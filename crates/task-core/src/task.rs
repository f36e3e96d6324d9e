use crate::error::CoreError;
use crate::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DESCRIPTION_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// A tracked unit of work.
///
/// Field order is the key order of the storage file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,
    pub description: String,
    pub status: Status,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// A fresh `todo` task whose creation and update times are both `now`.
    pub fn new(id: u64, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_description(&mut self, description: String, now: DateTime<Utc>) {
        self.description = description;
        self.touch(now);
    }

    pub fn set_status(&mut self, status: Status, now: DateTime<Utc>) {
        self.status = status;
        self.touch(now);
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        // never let a skewed clock move updatedAt behind createdAt
        self.updated_at = now.max(self.created_at);
    }
}

/// Trim a description and check its length in characters.
pub fn validate_description(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if !(DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len) {
        return Err(CoreError::InvalidDescription {
            len,
            min: DESCRIPTION_MIN_CHARS,
            max: DESCRIPTION_MAX_CHARS,
        });
    }
    Ok(trimmed.to_string())
}

/// Parse a task id given on the command line. Only positive integers are accepted.
pub fn parse_id(raw: &str) -> Result<u64, CoreError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::InvalidId(raw.to_string())),
    }
}

/// Coerce a stored id value to an integer.
///
/// Files edited by hand may carry ids as floats (`3.0`) or numeric strings
/// (`"3"`, `" 4.7 "`). Integers are taken as is, floats are truncated toward
/// zero, numeric strings are parsed and then treated the same way. The result
/// must be positive; anything else yields `None`.
pub fn coerce_id(value: &Value) -> Option<u64> {
    let id = match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(truncate_float)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate_float))
        }
        _ => None,
    }?;
    (id > 0).then_some(id)
}

fn truncate_float(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 0.0 && f < u64::MAX as f64).then(|| f.trunc() as u64)
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    coerce_id(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid task id {value}")))
}
