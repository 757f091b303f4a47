//! Typed access to one named collection blob.
//!
//! Each record collection lives under one well-known key as one JSON value.
//! [`Collection`] owns serialization in both directions and applies the
//! subsystem's failure policy: degraded reads, swallowed writes.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::traits::KeyValueStore;

/// Well-known keys for the persisted collections.
pub mod keys {
    /// Map of company name to company record.
    pub const COMPANIES: &str = "jobline.companies";
    /// Review ledger, most-recent-first.
    pub const REVIEWS: &str = "jobline.reviews";
    /// Blocked company names; set semantics enforced by the writer.
    pub const BLOCKED: &str = "jobline.blocked";
    /// Map of user id to followed-company entries.
    pub const FOLLOWS: &str = "jobline.follows";
    /// Salary report ledger, insertion order.
    pub const SALARIES: &str = "jobline.salaries";
}

/// A typed view of one collection blob under a fixed key.
///
/// `load` never fails: a missing key, a backend failure, or a corrupt blob
/// all degrade to `T::default()` (the empty collection), with a warning for
/// the two failure cases. `save` never fails either: serialization or
/// backend errors are logged and swallowed. Validation errors never pass
/// through here — they are raised by the domain layer before anything is
/// persisted.
pub struct Collection<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Bind to the collection stored under `key`.
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// The storage key this collection is bound to.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Read and decode the collection, degrading to the default on failure.
    pub fn load(&self, store: &dyn KeyValueStore) -> T {
        let raw = match store.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                warn!(key = self.key, error = %e, "collection read failed; using empty collection");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = self.key, error = %e, "corrupt collection blob; using empty collection");
                T::default()
            }
        }
    }

    /// Encode and write the collection, logging and swallowing failures.
    pub fn save(&self, store: &dyn KeyValueStore, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = self.key, error = %e, "collection encode failed; write dropped");
                return;
            }
        };

        if let Err(e) = store.set_item(self.key, &raw) {
            warn!(key = self.key, error = %e, "collection write failed; write dropped");
        }
    }
}

impl<T> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::error::{StoreError, StoreResult};
    use crate::memory::InMemoryKeyValueStore;

    use super::*;

    const TEST_KEY: &str = "jobline.test";

    // -----------------------------------------------------------------------
    // Round trip
    // -----------------------------------------------------------------------

    #[test]
    fn save_then_load_roundtrips() {
        let store = InMemoryKeyValueStore::new();
        let collection: Collection<Vec<String>> = Collection::new(TEST_KEY);

        collection.save(&store, &vec!["a".to_string(), "b".to_string()]);
        assert_eq!(collection.load(&store), vec!["a", "b"]);
    }

    #[test]
    fn map_collection_roundtrips() {
        let store = InMemoryKeyValueStore::new();
        let collection: Collection<BTreeMap<String, u32>> = Collection::new(TEST_KEY);

        let mut value = BTreeMap::new();
        value.insert("one".to_string(), 1);
        collection.save(&store, &value);
        assert_eq!(collection.load(&store), value);
    }

    // -----------------------------------------------------------------------
    // Read degradation
    // -----------------------------------------------------------------------

    #[test]
    fn missing_key_loads_default() {
        let store = InMemoryKeyValueStore::new();
        let collection: Collection<Vec<String>> = Collection::new(TEST_KEY);
        assert!(collection.load(&store).is_empty());
    }

    #[test]
    fn corrupt_blob_loads_default() {
        let store = InMemoryKeyValueStore::new();
        store.set_item(TEST_KEY, "not json at all {").unwrap();

        let collection: Collection<Vec<String>> = Collection::new(TEST_KEY);
        assert!(collection.load(&store).is_empty());
    }

    #[test]
    fn wrong_shape_blob_loads_default() {
        let store = InMemoryKeyValueStore::new();
        store.set_item(TEST_KEY, r#"{"a": 1}"#).unwrap();

        let collection: Collection<Vec<String>> = Collection::new(TEST_KEY);
        assert!(collection.load(&store).is_empty());
    }

    // -----------------------------------------------------------------------
    // Write swallowing
    // -----------------------------------------------------------------------

    /// A store whose writes always fail, for exercising the swallow policy.
    struct ReadOnlyStore(InMemoryKeyValueStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
            self.0.get_item(key)
        }
        fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Backend("quota exceeded".into()))
        }
        fn remove_item(&self, key: &str) -> StoreResult<bool> {
            self.0.remove_item(key)
        }
        fn keys(&self) -> StoreResult<Vec<String>> {
            self.0.keys()
        }
    }

    #[test]
    fn failed_write_is_swallowed() {
        let store = ReadOnlyStore(InMemoryKeyValueStore::new());
        let collection: Collection<Vec<String>> = Collection::new(TEST_KEY);

        // Must not panic or propagate; the store simply keeps its old state.
        collection.save(&store, &vec!["dropped".to_string()]);
        assert!(collection.load(&store).is_empty());
    }

    #[test]
    fn failing_read_loads_default() {
        struct BrokenReads;
        impl KeyValueStore for BrokenReads {
            fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
                Err(StoreError::Backend("storage unavailable".into()))
            }
            fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
                Ok(())
            }
            fn remove_item(&self, _key: &str) -> StoreResult<bool> {
                Ok(false)
            }
            fn keys(&self) -> StoreResult<Vec<String>> {
                Ok(Vec::new())
            }
        }

        let collection: Collection<Vec<String>> = Collection::new(TEST_KEY);
        assert!(collection.load(&BrokenReads).is_empty());
    }
}
