use crate::error::StoreResult;

/// Synchronous, origin-scoped string-to-string storage.
///
/// All implementations must satisfy these invariants:
/// - Operations are bounded synchronous calls; there are no suspension
///   points inside any of them.
/// - There is no multi-key atomicity. Callers that need several keys to
///   stay consistent must accept read-modify-write races with other
///   execution contexts sharing the same store.
/// - `get_item` returning `Ok(None)` means the key is absent; it is not an
///   error condition.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any existing value.
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove the value under `key`. Returns `true` if the key existed.
    fn remove_item(&self, key: &str) -> StoreResult<bool>;

    /// Sorted list of all keys currently present.
    fn keys(&self) -> StoreResult<Vec<String>>;
}
