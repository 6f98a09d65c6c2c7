//! Creation and modification times shared by catalog records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// When a record was created and last updated.
///
/// Embedded with `#[serde(flatten)]`, so the two fields appear at the top
/// level of a serialized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    /// Set once when the record is inserted.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Both timestamps set to `now`.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// A copy with `updated_at` moved to `now`.
    #[must_use]
    pub fn touched(self, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// Current time truncated to the millisecond precision used in storage.
pub(crate) fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// Convert stored epoch milliseconds back to a timestamp.
pub(crate) fn from_millis(field: &str, millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| Error::Validation {
        field: field.into(),
        message: format!("timestamp {millis} is out of range"),
    })
}
