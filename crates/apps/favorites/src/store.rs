//! Ordered favorites collection mirrored to one preference slot.

use std::{fmt, rc::Rc};

use leptos::logging;
use platform_host::{save_pref_with, PrefsStore};
use thiserror::Error;

use crate::{
    model::FavoriteEntry,
    validation::{validate_entry, ValidationError},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Preference-slot failures. None of these reach the user; they are logged and recovered.
pub enum StoreError {
    /// The host could not read the slot.
    #[error("favorites slot `{key}` read failed: {reason}")]
    Read {
        /// Slot key.
        key: String,
        /// Host-reported reason.
        reason: String,
    },
    /// The slot holds something other than a JSON array of entries.
    #[error("favorites slot `{key}` is malformed: {reason}")]
    Malformed {
        /// Slot key.
        key: String,
        /// Parser-reported reason.
        reason: String,
    },
    /// The collection could not be serialized or written.
    #[error("favorites slot `{key}` write failed: {reason}")]
    Write {
        /// Slot key.
        key: String,
        /// Host-reported reason.
        reason: String,
    },
}

/// In-memory favorites list backed by a whole-collection JSON slot.
///
/// Every successful mutation rewrites the full slot before returning. Indices are positions in
/// insertion order and shift after a removal, so callers must not hold them across mutations.
pub struct FavoritesStore {
    key: String,
    prefs: Rc<dyn PrefsStore>,
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    /// Reads the persisted collection; missing, unreadable, or malformed data yields an empty
    /// store.
    pub fn load(prefs: Rc<dyn PrefsStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match read_entries(prefs.as_ref(), &key) {
            Ok(entries) => entries,
            Err(err) => {
                logging::warn!("favorites load failed, starting empty: {err}");
                Vec::new()
            }
        };
        Self {
            key,
            prefs,
            entries,
        }
    }

    /// Validates and appends `entry`, then persists the collection.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationError`]; the collection is unchanged in that case.
    pub fn add(&mut self, entry: FavoriteEntry) -> Result<(), ValidationError> {
        validate_entry(&entry, &self.entries)?;
        self.entries.push(entry);
        self.persist_or_warn();
        Ok(())
    }

    /// Removes the entry at `index` and persists; out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<FavoriteEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.persist_or_warn();
        Some(removed)
    }

    /// Overwrites the slot with the full collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when serialization or the host write fails.
    pub fn persist(&self) -> Result<(), StoreError> {
        let write_error = |reason: String| StoreError::Write {
            key: self.key.clone(),
            reason,
        };
        save_pref_with(self.prefs.as_ref(), &self.key, &self.entries).map_err(write_error)
    }

    fn persist_or_warn(&self) {
        if let Err(err) = self.persist() {
            logging::warn!("persist favorites failed: {err}");
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &self.key)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

fn read_entries(prefs: &dyn PrefsStore, key: &str) -> Result<Vec<FavoriteEntry>, StoreError> {
    let raw = prefs.load_pref(key).map_err(|reason| StoreError::Read {
        key: key.to_string(),
        reason,
    })?;
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::IconStyle;

    const KEY: &str = "favorites";

    fn fresh() -> (MemoryPrefsStore, FavoritesStore) {
        let prefs = MemoryPrefsStore::default();
        let store = FavoritesStore::load(Rc::new(prefs.clone()), KEY);
        (prefs, store)
    }

    fn reload(prefs: &MemoryPrefsStore) -> FavoritesStore {
        FavoritesStore::load(Rc::new(prefs.clone()), KEY)
    }

    struct FailingPrefs;

    impl PrefsStore for FailingPrefs {
        fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
            Err("storage disabled".to_string())
        }

        fn save_pref(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }

        fn delete_pref(&self, _key: &str) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn missing_slot_loads_empty() {
        let (_prefs, store) = fresh();
        assert!(store.is_empty());
    }

    #[test]
    fn valid_add_appends_one_and_persists_verbatim() {
        let (prefs, mut store) = fresh();
        let entry = FavoriteEntry::new("Example", "https://example.com")
            .with_icon(Some("icons/example.png".to_string()))
            .with_style(IconStyle::Text, "#722ed1");

        store.add(entry.clone()).expect("add");

        assert_eq!(store.len(), 1);
        let persisted: Vec<FavoriteEntry> =
            serde_json::from_str(&prefs.raw(KEY).expect("slot written")).expect("parse");
        assert_eq!(persisted, vec![entry]);
    }

    #[test]
    fn invalid_url_after_valid_add_keeps_single_entry() {
        let (prefs, mut store) = fresh();

        store
            .add(FavoriteEntry::new("Example", "https://example.com"))
            .expect("first add");
        let second = store.add(FavoriteEntry::new("Example2", "not-a-url"));

        assert_eq!(second, Err(ValidationError::InvalidUrl));
        assert_eq!(store.len(), 1);
        assert_eq!(reload(&prefs).len(), 1);
    }

    #[test]
    fn rejected_adds_leave_collection_untouched() {
        let (prefs, mut store) = fresh();
        store
            .add(FavoriteEntry::new("Example", "https://example.com"))
            .expect("seed");
        let before = prefs.raw(KEY);

        for (candidate, expected) in [
            (FavoriteEntry::new("", "https://a.example"), ValidationError::BlankName),
            (FavoriteEntry::new("A", ""), ValidationError::BlankUrl),
            (FavoriteEntry::new("A", "nope"), ValidationError::InvalidUrl),
            (
                FavoriteEntry::new("Dup", "https://example.com"),
                ValidationError::DuplicateUrl,
            ),
        ] {
            assert_eq!(store.add(candidate), Err(expected));
        }

        assert_eq!(store.len(), 1);
        assert_eq!(prefs.raw(KEY), before);
    }

    #[test]
    fn remove_then_reload_drops_only_that_position() {
        let (prefs, mut store) = fresh();
        for (name, url) in [
            ("A", "https://a.example"),
            ("B", "https://b.example"),
            ("C", "https://c.example"),
        ] {
            store.add(FavoriteEntry::new(name, url)).expect("add");
        }
        let mut expected = store.entries().to_vec();
        expected.remove(1);

        let removed = store.remove(1).expect("in range");

        assert_eq!(removed.name, "B");
        assert_eq!(reload(&prefs).entries(), expected.as_slice());
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let (prefs, mut store) = fresh();
        store
            .add(FavoriteEntry::new("A", "https://a.example"))
            .expect("add");

        assert_eq!(store.remove(5), None);
        assert_eq!(reload(&prefs).len(), 1);
    }

    #[test]
    fn persisted_collection_round_trips_field_for_field() {
        let (prefs, mut store) = fresh();
        store
            .add(FavoriteEntry::new("A", "https://a.example"))
            .expect("add");
        store
            .add(
                FavoriteEntry::new("B", "https://b.example/path?q=1")
                    .with_icon(Some("b.png".to_string()))
                    .with_style(IconStyle::Large, "#13c2c2"),
            )
            .expect("add");
        store
            .add(FavoriteEntry::new("C", "http://c.example"))
            .expect("add");
        store.remove(0);

        assert_eq!(reload(&prefs).entries(), store.entries());
    }

    #[test]
    fn corrupt_slot_loads_empty() {
        let prefs = MemoryPrefsStore::default();
        prefs.insert_raw(KEY, "definitely { not json");

        assert!(reload(&prefs).is_empty());
    }

    #[test]
    fn wrong_shape_slot_loads_empty() {
        let prefs = MemoryPrefsStore::default();
        prefs.insert_raw(KEY, r#"{"name":"A","url":"https://a.example"}"#);

        assert!(reload(&prefs).is_empty());
    }

    #[test]
    fn legacy_payload_with_sparse_fields_loads() {
        let prefs = MemoryPrefsStore::default();
        prefs.insert_raw(
            KEY,
            r#"[{"name":"Docs","url":"https://docs.example.com","icon":"docs.png"}]"#,
        );

        let store = reload(&prefs);

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].icon.as_deref(), Some("docs.png"));
        assert_eq!(store.entries()[0].url, "https://docs.example.com");
    }

    #[test]
    fn host_failures_never_reach_the_caller() {
        let mut store = FavoritesStore::load(Rc::new(FailingPrefs), KEY);
        assert!(store.is_empty());

        store
            .add(FavoriteEntry::new("A", "https://a.example"))
            .expect("validation still passes");
        assert_eq!(store.len(), 1);
        assert!(matches!(store.persist(), Err(StoreError::Write { .. })));
    }
}
