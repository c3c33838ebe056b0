//! Abstract storage contract for record stores.
//!
//! The trait defines what orchestration code programs against. Backends
//! must keep identity allocation atomic, keep mutations to the mapping
//! mutually exclusive, and treat absence as a normal outcome rather than
//! an error.

use thiserror::Error;

use crate::ident::RecordId;
use crate::record::Record;
use crate::value::AttributeValue;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record broke the capability contract at save time.
    #[error("invalid {kind} record: {reason}")]
    InvalidRecord {
        /// Record type name.
        kind: &'static str,
        /// What the record failed to provide.
        reason: String,
    },

    /// The queried attribute is not declared by the record type.
    #[error("unknown attribute `{attribute}` on {kind}")]
    UnknownAttribute {
        /// Record type name.
        kind: &'static str,
        /// The undeclared attribute name.
        attribute: String,
    },

    /// Backend failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Identity-managed storage for a single record type.
///
/// # Semantics
/// - `save` assigns a fresh identity on every call; saving a record that
///   already carries one produces a second, distinct entry.
/// - Absence (missing identity on delete, no query matches) is an empty
///   result, never an error.
/// - Query results carry no order guarantee; compare them as sets.
pub trait RecordStore<T: Record>: Send + Sync {
    /// Draws the next identity, assigns it to `record`, inserts the pair,
    /// and returns the identified record.
    ///
    /// # Errors
    /// `InvalidRecord` when the identity slot does not retain the assigned
    /// id; nothing is inserted in that case.
    fn save(&self, record: T) -> Result<T, StoreError>;

    /// Removes and returns the record stored under `id`, or `None` when no
    /// such record exists. The identity counter is unaffected either way.
    ///
    /// # Errors
    /// Backend failures only.
    fn delete(&self, id: RecordId) -> Result<Option<T>, StoreError>;

    /// Returns every stored record whose named attribute is non-null and
    /// equal to `value`.
    ///
    /// The name is validated against the type's attribute table before any
    /// scanning happens, so a bad name fails the whole call up front.
    ///
    /// # Errors
    /// `UnknownAttribute` when the type does not declare `attribute`; the
    /// store is left unchanged.
    fn find_by_attribute(
        &self,
        attribute: &str,
        value: &AttributeValue,
    ) -> Result<Vec<T>, StoreError>;

    /// Snapshot of every stored record, each exactly once, unordered.
    ///
    /// # Errors
    /// Backend failures only.
    fn find_all(&self) -> Result<Vec<T>, StoreError>;
}
