//! Listener fault semantics.

use beacon_store::{AfterSet, BeforeSet, MemoryStore, Record, StoreError};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: String,
    value: u32,
}

impl Record for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

fn item(id: &str, value: u32) -> Item {
    Item {
        id: id.to_string(),
        value,
    }
}

#[test]
fn test_before_fault_leaves_mapping_unmodified() {
    let store = MemoryStore::new();
    store.on_before_set(|_: &BeforeSet<Item>| Err(StoreError::listener("veto")));

    let err = store.set(item("a", 1)).unwrap_err();

    assert!(matches!(err, StoreError::Listener(_)));
    assert_eq!(store.get("a"), None);
    assert!(store.is_empty());
}

#[test]
fn test_after_fault_leaves_write_applied() {
    let store = MemoryStore::new();
    store.on_after_set(|_: &AfterSet<Item>| Err(StoreError::listener("late")));

    let err = store.set(item("a", 1)).unwrap_err();

    assert!(matches!(err, StoreError::Listener(_)));
    assert_eq!(store.get("a"), Some(item("a", 1)));
}

#[test]
fn test_fault_aborts_remaining_listeners() {
    let store = MemoryStore::new();
    let calls = Arc::new(Mutex::new(Vec::new()));

    {
        let calls = Arc::clone(&calls);
        store.on_before_set(move |_: &BeforeSet<Item>| {
            calls.lock().push("first");
            Ok(())
        });
    }
    store.on_before_set(|_: &BeforeSet<Item>| Err(StoreError::listener("boom")));
    {
        let calls = Arc::clone(&calls);
        store.on_before_set(move |_: &BeforeSet<Item>| {
            calls.lock().push("third");
            Ok(())
        });
    }

    store.set(item("a", 1)).unwrap_err();

    assert_eq!(*calls.lock(), vec!["first"]);
}

#[test]
fn test_store_usable_after_fault() {
    let store = MemoryStore::new();
    let veto = Arc::new(Mutex::new(true));

    {
        let veto = Arc::clone(&veto);
        store.on_before_set(move |_: &BeforeSet<Item>| {
            if *veto.lock() {
                Err(StoreError::listener("not yet"))
            } else {
                Ok(())
            }
        });
    }

    store.set(item("a", 1)).unwrap_err();
    assert_eq!(store.get("a"), None);

    *veto.lock() = false;
    store.set(item("a", 2)).unwrap();
    assert_eq!(store.get("a"), Some(item("a", 2)));
}

#[test]
fn test_fault_message_surfaces() {
    let store = MemoryStore::new();
    store.on_before_set(|_: &BeforeSet<Item>| Err(StoreError::listener("quota exceeded")));

    let err = store.set(item("a", 1)).unwrap_err();

    assert_eq!(err.to_string(), "Listener failed: quota exceeded");
}
