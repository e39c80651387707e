//! Status taxonomy and the storage port.
//!
//! The storage port is implemented by the `weakspot-store` crate; it is
//! defined here so the store can be swapped out in tests without pulling in
//! file I/O.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BackendError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Self-assessed status of a single trackable mistake.
///
/// An item is in at most one of the two persisted sets at any time;
/// everything else is `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Unset,
    Mastered,
    NeedsReview,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unset => write!(f, "unset"),
            Status::Mastered => write!(f, "mastered"),
            Status::NeedsReview => write!(f, "needs-review"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unset" => Ok(Status::Unset),
            "mastered" => Ok(Status::Mastered),
            "needs-review" | "review" | "weak" => Ok(Status::NeedsReview),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Storage port
// ---------------------------------------------------------------------------

/// Storage key for the mastered set.
pub const MASTERED_KEY: &str = "weakspot_mastered";

/// Storage key for the needs-review set.
pub const NEEDS_REVIEW_KEY: &str = "weakspot_needs_review";

/// Key-value port the status store persists through.
///
/// Payloads are bare JSON arrays of ID strings under the two fixed keys
/// above — no version field, so format changes must stay backward
/// compatible. Every method is fallible: the store treats failures as a
/// loss of durability, never as a reason to abort the in-memory
/// transition.
pub trait StatusBackend {
    /// Read the payload stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Store `payload` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, payload: &str) -> Result<(), BackendError>;

    /// Remove `key` entirely. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), BackendError>;
}
