//! Lightweight preference slot contracts and adapters.
//!
//! Browser storage is synchronous at the API boundary, so the contract is too: every call runs to
//! completion before returning and callers never observe a partially written slot.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::Serialize;

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads the raw JSON string stored under `key`.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Overwrites the raw JSON string stored under `key`.
    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String>;

    /// Deletes `key`; deleting a missing key succeeds.
    fn delete_pref(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, which lets a test hand one handle to the code under test and
/// inspect or corrupt the slot through another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Writes a raw value without any validation.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.raw(key))
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String> {
        self.insert_raw(key, raw_json);
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Bookmark {
        name: String,
        url: String,
    }

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref("pref.key", "[1,2]").expect("save");
        assert_eq!(
            store_obj.load_pref("pref.key").expect("load"),
            Some("[1,2]".to_string())
        );
        store_obj.delete_pref("pref.key").expect("delete");
        assert_eq!(store_obj.load_pref("pref.key").expect("load"), None);
    }

    #[test]
    fn memory_prefs_store_clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let observer = store.clone();

        store.save_pref("favorites", "[]").expect("save");

        assert_eq!(observer.raw("favorites"), Some("[]".to_string()));
    }

    #[test]
    fn typed_save_writes_json_text() {
        let store = MemoryPrefsStore::default();
        let bookmarks = vec![Bookmark {
            name: "Docs".to_string(),
            url: "https://docs.example.com".to_string(),
        }];

        save_pref_with(&store, "favorites", &bookmarks).expect("save typed pref");
        let raw = store.raw("favorites").expect("slot written");
        let loaded: Vec<Bookmark> = serde_json::from_str(&raw).expect("parse");

        assert_eq!(loaded, bookmarks);
    }
}
