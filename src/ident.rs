//! Record identity: store-assigned ids and the per-store id sequence.
//!
//! Identities are sequential 64-bit integers, unique within one store
//! instance, assigned exactly once at first save, and never reused even
//! after the record they named is deleted.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Store-assigned unique identifier for a stored record.
///
/// # Examples
///
/// ```
/// use clinicore::RecordId;
///
/// let id = RecordId::from_raw(7);
/// assert_eq!(id.as_u64(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Creates a record id from a raw integer.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// Monotonic id source owned by a single store instance.
///
/// Allocation is one atomic fetch-and-add, independent of whatever lock the
/// store holds around its mapping. The sequence starts at 1 and only ever
/// moves forward; a delete leaves it untouched, so gaps are permanent.
#[derive(Debug)]
pub struct IdentSequence {
    next: AtomicU64,
}

impl IdentSequence {
    /// Creates a sequence whose first allocated id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Allocates the next id.
    pub fn allocate(&self) -> RecordId {
        RecordId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdentSequence {
    fn default() -> Self {
        Self::new()
    }
}
