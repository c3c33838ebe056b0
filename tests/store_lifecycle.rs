use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;

use clinicore::{
    AttributeValue, BloodType, InMemoryStore, Patient, Record, RecordId, RecordStore, StoreError,
};

fn patient(first: &str, last: &str, dni: &str) -> Patient {
    Patient::builder()
        .first_name(first)
        .last_name(last)
        .dni(dni)
        .birth_date(NaiveDate::from_ymd_opt(1985, 12, 5).unwrap())
        .blood_type(BloodType::APositive)
        .build()
        .unwrap()
}

fn dni_set(patients: &[Patient]) -> BTreeSet<String> {
    patients.iter().map(|p| p.dni().to_string()).collect()
}

#[test]
fn identities_are_unique_and_strictly_increasing() {
    let store = InMemoryStore::new();
    let mut ids = Vec::new();
    for i in 0..10 {
        let saved = store.save(patient("P", "N", &format!("{i:08}"))).unwrap();
        ids.push(saved.ident().unwrap());
    }

    let unique: BTreeSet<RecordId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn save_round_trip_exposes_identity_through_find_all() {
    let store = InMemoryStore::new();
    let saved = store.save(patient("María", "López", "11111111")).unwrap();

    let all = store.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].ident(), saved.ident());
    assert_eq!(all[0].dni(), "11111111");
}

#[test]
fn delete_excludes_record_but_keeps_counter_moving() {
    let store = InMemoryStore::new();
    let a = store.save(patient("María", "López", "11111111")).unwrap();
    let id = a.ident().unwrap();

    let removed = store.delete(id).unwrap().unwrap();
    assert_eq!(removed.dni(), "11111111");
    assert!(store.find_all().unwrap().is_empty());

    let next = store.save(patient("Pedro", "García", "22222222")).unwrap();
    assert_ne!(next.ident().unwrap(), id);
}

#[test]
fn delete_of_unknown_identity_is_a_non_event() {
    let store = InMemoryStore::new();
    store.save(patient("María", "López", "11111111")).unwrap();

    assert!(store.delete(RecordId::from_raw(42)).unwrap().is_none());
    assert_eq!(store.find_all().unwrap().len(), 1);

    // Deleting twice is equally harmless.
    store.delete(RecordId::from_raw(1)).unwrap();
    assert!(store.delete(RecordId::from_raw(1)).unwrap().is_none());
}

#[test]
fn find_by_attribute_compares_result_sets() {
    let store = InMemoryStore::new();
    store.save(patient("María", "López", "11111111")).unwrap();
    store.save(patient("Marta", "López", "22222222")).unwrap();
    store.save(patient("Pedro", "García", "33333333")).unwrap();

    let lopez = store
        .find_by_attribute("last_name", &AttributeValue::from("López"))
        .unwrap();
    assert_eq!(
        dni_set(&lopez),
        BTreeSet::from(["11111111".to_string(), "22222222".to_string()])
    );

    let nobody = store
        .find_by_attribute("last_name", &AttributeValue::from("Pérez"))
        .unwrap();
    assert!(nobody.is_empty());
}

#[test]
fn unknown_attribute_fails_whole_call_and_changes_nothing() {
    let store = InMemoryStore::new();
    store.save(patient("María", "López", "11111111")).unwrap();

    let err = store
        .find_by_attribute("eye_color", &AttributeValue::from("green"))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::UnknownAttribute { kind: "Patient", .. }
    ));
    assert_eq!(store.find_all().unwrap().len(), 1);
}

#[test]
fn resave_creates_a_second_entry_under_a_fresh_identity() {
    let store = InMemoryStore::new();
    let first = store.save(patient("María", "López", "11111111")).unwrap();
    let second = store.save(first.clone()).unwrap();

    assert_ne!(first.ident(), second.ident());
    let matches = store
        .find_by_attribute("dni", &AttributeValue::from("11111111"))
        .unwrap();
    assert_eq!(matches.len(), 2);
}

#[test]
fn demo_scenario_end_to_end() {
    let store = InMemoryStore::new();

    let a = store.save(patient("María", "López", "11111111")).unwrap();
    assert_eq!(a.ident(), Some(RecordId::from_raw(1)));

    let b = store.save(patient("Pedro", "García", "22222222")).unwrap();
    assert_eq!(b.ident(), Some(RecordId::from_raw(2)));

    let hits = store
        .find_by_attribute("dni", &AttributeValue::from("11111111"))
        .unwrap();
    assert_eq!(dni_set(&hits), BTreeSet::from(["11111111".to_string()]));

    let removed = store.delete(RecordId::from_raw(1)).unwrap().unwrap();
    assert_eq!(removed.dni(), "11111111");

    let remaining = store.find_all().unwrap();
    assert_eq!(dni_set(&remaining), BTreeSet::from(["22222222".to_string()]));

    let c = store.save(patient("Elena", "Fernández", "33333333")).unwrap();
    assert_eq!(c.ident(), Some(RecordId::from_raw(3)));
}

#[test]
fn stores_do_not_share_identity_sequences() {
    let patients = InMemoryStore::new();
    let more_patients = InMemoryStore::new();

    let a = patients.save(patient("María", "López", "11111111")).unwrap();
    let b = more_patients
        .save(patient("Pedro", "García", "22222222"))
        .unwrap();
    assert_eq!(a.ident(), Some(RecordId::from_raw(1)));
    assert_eq!(b.ident(), Some(RecordId::from_raw(1)));
}

#[test]
fn parallel_saves_yield_disjoint_identities() {
    let store = Arc::new(InMemoryStore::new());
    let mut handles = Vec::new();
    for t in 0..8 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            let mut ids = Vec::new();
            for i in 0..25 {
                let saved = store
                    .save(patient("Worker", "Thread", &format!("{t:02}{i:06}")))
                    .unwrap();
                ids.push(saved.ident().unwrap());
            }
            ids
        }));
    }

    let mut all = Vec::new();
    for handle in handles {
        all.extend(handle.join().unwrap());
    }
    let unique: BTreeSet<RecordId> = all.iter().copied().collect();
    assert_eq!(unique.len(), 200);
    assert_eq!(store.find_all().unwrap().len(), 200);
}
