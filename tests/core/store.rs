use listpad::core::error::ListpadError;
use listpad::core::record::{FieldValue, Record};
use listpad::core::store::RecordStore;
use listpad::screens::{coerce_named_fields, market};
use tempfile::tempdir;

fn item(title: &str, category: &str, price: &str) -> Vec<FieldValue> {
    coerce_named_fields(
        &market::SCHEMA,
        &[("title", title), ("category", category), ("price", price)],
    )
    .unwrap()
}

#[test]
fn ensure_schema_is_idempotent() {
    let tmp = tempdir().unwrap();
    let store = RecordStore::open(&tmp.path().join("market.db"), &market::SCHEMA).unwrap();

    for _ in 0..5 {
        store.ensure_schema().unwrap();
    }

    // The table is usable after repeated initialization.
    store.insert(&item("Milk", "Dairy", "25000")).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn insert_round_trips_through_load_all() {
    let tmp = tempdir().unwrap();
    let store = RecordStore::open(&tmp.path().join("market.db"), &market::SCHEMA).unwrap();
    store.ensure_schema().unwrap();

    let values = item("Eggs", "Breakfast", "18000");
    let inserted = store.insert(&values).unwrap();

    let all = store.load_all().unwrap();
    let found = all.iter().find(|r| r.id == inserted.id).expect("record");
    assert_eq!(found.values, values);
}

#[test]
fn load_all_orders_newest_first_with_monotonic_ids() {
    let tmp = tempdir().unwrap();
    let store = RecordStore::open(&tmp.path().join("market.db"), &market::SCHEMA).unwrap();
    store.ensure_schema().unwrap();

    let a = store.insert(&item("Milk", "Dairy", "25000")).unwrap();
    let b = store.insert(&item("Bread", "Bakery", "12000")).unwrap();
    let c = store.insert(&item("Tea", "Drinks", "9000")).unwrap();
    assert!(a.id < b.id && b.id < c.id);

    let ids: Vec<i64> = store.load_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[test]
fn update_changes_only_the_targeted_record() {
    let tmp = tempdir().unwrap();
    let store = RecordStore::open(&tmp.path().join("market.db"), &market::SCHEMA).unwrap();
    store.ensure_schema().unwrap();

    store.insert(&item("Milk", "Dairy", "25000")).unwrap();
    let target = store.insert(&item("Bread", "Bakery", "12000")).unwrap();
    store.insert(&item("Tea", "Drinks", "9000")).unwrap();
    let before: Vec<Record> = store.load_all().unwrap();

    let replacement = item("Rye bread", "Bakery", "15000");
    store.update(target.id, &replacement).unwrap();

    let after = store.load_all().unwrap();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.id, new.id);
        if new.id == target.id {
            assert_eq!(new.values, replacement);
        } else {
            assert_eq!(new.values, old.values);
        }
    }
}

#[test]
fn update_missing_id_is_not_found() {
    let tmp = tempdir().unwrap();
    let store = RecordStore::open(&tmp.path().join("market.db"), &market::SCHEMA).unwrap();
    store.ensure_schema().unwrap();

    let err = store.update(9999, &item("Ghost", "None", "0")).unwrap_err();
    assert!(matches!(err, ListpadError::NotFound(_)));
}

#[test]
fn delete_removes_exactly_one_record() {
    let tmp = tempdir().unwrap();
    let store = RecordStore::open(&tmp.path().join("market.db"), &market::SCHEMA).unwrap();
    store.ensure_schema().unwrap();

    store.insert(&item("Milk", "Dairy", "25000")).unwrap();
    let victim = store.insert(&item("Bread", "Bakery", "12000")).unwrap();
    store.insert(&item("Tea", "Drinks", "9000")).unwrap();
    let before = store.load_all().unwrap();

    store.delete(victim.id).unwrap();

    let after = store.load_all().unwrap();
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|r| r.id != victim.id));
    for survivor in &after {
        let old = before.iter().find(|r| r.id == survivor.id).unwrap();
        assert_eq!(survivor.values, old.values);
    }
}

#[test]
fn delete_absent_id_is_a_noop() {
    let tmp = tempdir().unwrap();
    let store = RecordStore::open(&tmp.path().join("market.db"), &market::SCHEMA).unwrap();
    store.ensure_schema().unwrap();

    store.insert(&item("Milk", "Dairy", "25000")).unwrap();
    store.delete(424242).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn ids_are_never_reused_after_delete() {
    let tmp = tempdir().unwrap();
    let store = RecordStore::open(&tmp.path().join("market.db"), &market::SCHEMA).unwrap();
    store.ensure_schema().unwrap();

    let first = store.insert(&item("Milk", "Dairy", "25000")).unwrap();
    store.delete(first.id).unwrap();
    let second = store.insert(&item("Milk", "Dairy", "25000")).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn insert_rejects_wrong_field_count() {
    let store = RecordStore::open_in_memory(&market::SCHEMA).unwrap();
    store.ensure_schema().unwrap();

    let err = store
        .insert(&[FieldValue::Text("only-title".to_string())])
        .unwrap_err();
    assert!(matches!(err, ListpadError::ValidationError(_)));
}
