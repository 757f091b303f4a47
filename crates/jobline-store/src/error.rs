/// Errors from key-value store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The underlying storage backend failed to read or write.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A stored blob could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
