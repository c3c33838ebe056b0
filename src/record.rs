//! The capability contract storable types implement.
//!
//! The store treats records as opaque except for two capabilities: an
//! identity slot it assigns exactly once, and a declared table of named
//! attributes usable for equality lookups. The table is a static, built
//! once per type, so an unknown attribute name is detectable before any
//! record is inspected.

use std::fmt;

use crate::ident::RecordId;
use crate::value::AttributeValue;

/// Descriptor for one named, readable attribute of a record type.
pub struct AttributeDef<T> {
    /// Attribute name as used in queries.
    pub name: &'static str,
    /// Reads the attribute's current value from a record.
    pub get: fn(&T) -> AttributeValue,
}

impl<T> Clone for AttributeDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AttributeDef<T> {}

impl<T> fmt::Debug for AttributeDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDef")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Capability contract for records the stores can manage.
///
/// Implementors declare a short type name for diagnostics, an identity slot
/// the store fills in at save time, and their attribute table. Everything a
/// query needs is checkable against the table without touching a single
/// stored record.
pub trait Record: Sized + 'static {
    /// Type name used in diagnostics and error messages.
    const KIND: &'static str;

    /// Returns the assigned identity, or `None` before the first save.
    fn ident(&self) -> Option<RecordId>;

    /// Stores the identity the store assigned.
    fn assign_ident(&mut self, id: RecordId);

    /// The type's declared attribute table.
    fn attributes() -> &'static [AttributeDef<Self>];

    /// Resolves a named attribute, or `None` when the type does not
    /// declare it.
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        Self::attributes()
            .iter()
            .find(|def| def.name == name)
            .map(|def| (def.get)(self))
    }
}
