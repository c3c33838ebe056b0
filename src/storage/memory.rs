//! In-memory storage backend.
//!
//! One generic implementation serves every record type. Identity
//! allocation is a single atomic operation on the store-owned sequence;
//! the mapping sits behind a reader/writer lock, so scans see consistent
//! snapshots and writers serialize.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::info;

use crate::ident::{IdentSequence, RecordId};
use crate::record::Record;
use crate::storage::traits::{RecordStore, StoreError};
use crate::value::AttributeValue;

fn lock_err(context: &'static str) -> StoreError {
    StoreError::Backend(format!("poisoned lock: {context}"))
}

/// Thread-safe, identity-managed in-memory store for one record type.
///
/// Contents do not survive the process; this is an object cache, not a
/// database engine.
///
/// # Examples
///
/// ```rust,ignore
/// use clinicore::{InMemoryStore, Patient, RecordStore};
///
/// let store: InMemoryStore<Patient> = InMemoryStore::new();
/// let saved = store.save(patient)?;
/// assert!(saved.ident().is_some());
/// ```
#[derive(Debug)]
pub struct InMemoryStore<T> {
    records: RwLock<HashMap<RecordId, T>>,
    idents: IdentSequence,
}

impl<T> InMemoryStore<T> {
    /// Creates a new empty store with its own identity sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            idents: IdentSequence::new(),
        }
    }
}

impl<T> RecordStore<T> for InMemoryStore<T>
where
    T: Record + Clone + Send + Sync,
{
    fn save(&self, mut record: T) -> Result<T, StoreError> {
        let id = self.idents.allocate();
        record.assign_ident(id);
        if record.ident() != Some(id) {
            // Identity slot did not retain the assignment; the allocated id
            // stays burned but the mapping is untouched.
            return Err(StoreError::InvalidRecord {
                kind: T::KIND,
                reason: format!("identity slot did not retain id {id}"),
            });
        }

        let mut records = self.records.write().map_err(|_| lock_err("save"))?;
        records.insert(id, record.clone());
        drop(records);

        info!(target: "clinicore::store", "{} id: {}", T::KIND, id);
        Ok(record)
    }

    fn delete(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().map_err(|_| lock_err("delete"))?;
        Ok(records.remove(&id))
    }

    fn find_by_attribute(
        &self,
        attribute: &str,
        value: &AttributeValue,
    ) -> Result<Vec<T>, StoreError> {
        let Some(def) = T::attributes().iter().find(|d| d.name == attribute) else {
            return Err(StoreError::UnknownAttribute {
                kind: T::KIND,
                attribute: attribute.to_string(),
            });
        };

        let records = self
            .records
            .read()
            .map_err(|_| lock_err("find_by_attribute"))?;
        Ok(records
            .values()
            .filter(|record| {
                let resolved = (def.get)(record);
                !resolved.is_null() && resolved == *value
            })
            .cloned()
            .collect())
    }

    fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().map_err(|_| lock_err("find_all"))?;
        Ok(records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::record::AttributeDef;

    #[derive(Debug, Clone, PartialEq)]
    struct Sample {
        ident: Option<RecordId>,
        name: String,
        size: i64,
        note: Option<String>,
    }

    impl Sample {
        fn new(name: &str, size: i64) -> Self {
            Self {
                ident: None,
                name: name.to_string(),
                size,
                note: None,
            }
        }
    }

    impl Record for Sample {
        const KIND: &'static str = "Sample";

        fn ident(&self) -> Option<RecordId> {
            self.ident
        }

        fn assign_ident(&mut self, id: RecordId) {
            self.ident = Some(id);
        }

        fn attributes() -> &'static [AttributeDef<Self>] {
            const ATTRS: &[AttributeDef<Sample>] = &[
                AttributeDef {
                    name: "name",
                    get: |s| AttributeValue::from(s.name.as_str()),
                },
                AttributeDef {
                    name: "size",
                    get: |s| AttributeValue::from(s.size),
                },
                AttributeDef {
                    name: "note",
                    get: |s| AttributeValue::from(s.note.clone()),
                },
            ];
            ATTRS
        }
    }

    fn ids(records: &[Sample]) -> BTreeSet<RecordId> {
        records.iter().filter_map(Record::ident).collect()
    }

    #[test]
    fn save_assigns_unique_increasing_identities() {
        let store = InMemoryStore::new();
        let mut seen = Vec::new();
        for i in 0..5 {
            let saved = store.save(Sample::new("s", i)).unwrap();
            seen.push(saved.ident.unwrap());
        }
        for pair in seen.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(seen[0], RecordId::from_raw(1));
    }

    #[test]
    fn saved_record_is_visible_with_its_identity() {
        let store = InMemoryStore::new();
        let saved = store.save(Sample::new("alpha", 1)).unwrap();
        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], saved);
        assert_eq!(all[0].ident, Some(RecordId::from_raw(1)));
    }

    #[test]
    fn delete_returns_record_and_never_reuses_identity() {
        let store = InMemoryStore::new();
        let saved = store.save(Sample::new("alpha", 1)).unwrap();
        let id = saved.ident.unwrap();

        let removed = store.delete(id).unwrap();
        assert_eq!(removed, Some(saved));
        assert!(store.find_all().unwrap().is_empty());

        let next = store.save(Sample::new("beta", 2)).unwrap();
        assert_ne!(next.ident.unwrap(), id);
        assert_eq!(next.ident.unwrap(), RecordId::from_raw(2));
    }

    #[test]
    fn delete_of_missing_identity_is_empty_and_harmless() {
        let store = InMemoryStore::new();
        let saved = store.save(Sample::new("alpha", 1)).unwrap();

        assert_eq!(store.delete(RecordId::from_raw(99)).unwrap(), None);
        // Double delete is just as harmless.
        store.delete(saved.ident.unwrap()).unwrap();
        assert_eq!(store.delete(saved.ident.unwrap()).unwrap(), None);

        let next = store.save(Sample::new("beta", 2)).unwrap();
        assert_eq!(next.ident.unwrap(), RecordId::from_raw(2));
    }

    #[test]
    fn find_by_attribute_returns_exact_matching_subset() {
        let store = InMemoryStore::new();
        let a = store.save(Sample::new("alpha", 1)).unwrap();
        let b = store.save(Sample::new("alpha", 2)).unwrap();
        let _c = store.save(Sample::new("gamma", 1)).unwrap();

        let matched = store
            .find_by_attribute("name", &AttributeValue::from("alpha"))
            .unwrap();
        assert_eq!(ids(&matched), ids(&[a, b]));

        let none = store
            .find_by_attribute("name", &AttributeValue::from("delta"))
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn find_by_attribute_matches_non_string_values() {
        let store = InMemoryStore::new();
        let a = store.save(Sample::new("alpha", 7)).unwrap();
        store.save(Sample::new("beta", 8)).unwrap();

        let matched = store
            .find_by_attribute("size", &AttributeValue::Int(7))
            .unwrap();
        assert_eq!(ids(&matched), ids(&[a]));
    }

    #[test]
    fn unknown_attribute_fails_fast_and_leaves_store_unchanged() {
        let store = InMemoryStore::new();
        store.save(Sample::new("alpha", 1)).unwrap();

        let err = store
            .find_by_attribute("weight", &AttributeValue::Int(1))
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownAttribute { .. }));
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn null_attributes_never_match() {
        let store = InMemoryStore::new();
        let mut with_note = Sample::new("alpha", 1);
        with_note.note = Some("checked".to_string());
        let with_note = store.save(with_note).unwrap();
        store.save(Sample::new("beta", 2)).unwrap();

        let matched = store
            .find_by_attribute("note", &AttributeValue::from("checked"))
            .unwrap();
        assert_eq!(ids(&matched), ids(&[with_note]));

        // Querying for Null cannot match either; null resolutions are
        // excluded before comparison.
        let null_query = store
            .find_by_attribute("note", &AttributeValue::Null)
            .unwrap();
        assert!(null_query.is_empty());
    }

    #[test]
    fn resaving_an_identified_record_creates_a_second_entry() {
        let store = InMemoryStore::new();
        let first = store.save(Sample::new("alpha", 1)).unwrap();
        let second = store.save(first.clone()).unwrap();

        assert_ne!(first.ident, second.ident);
        assert_eq!(second.ident, Some(RecordId::from_raw(2)));
        assert_eq!(store.find_all().unwrap().len(), 2);
    }

    #[test]
    fn concurrent_saves_never_duplicate_identities() {
        let store = Arc::new(InMemoryStore::new());
        let mut handles = Vec::new();
        for t in 0..4i64 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                let mut mine = Vec::new();
                for i in 0..50i64 {
                    let saved = store.save(Sample::new("worker", t * 100 + i)).unwrap();
                    mine.push(saved.ident.unwrap());
                }
                mine
            }));
        }

        let mut all: Vec<RecordId> = Vec::new();
        for handle in handles {
            all.extend(handle.join().unwrap());
        }
        let unique: BTreeSet<RecordId> = all.iter().copied().collect();
        assert_eq!(unique.len(), 200);
        assert_eq!(store.find_all().unwrap().len(), 200);
    }

    // Compile-time test: the in-memory backend satisfies the trait object.
    fn _assert_object_safe(_: &dyn RecordStore<Sample>) {}
}
