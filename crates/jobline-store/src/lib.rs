//! Key-value storage port for the JobLine company directory.
//!
//! The directory persists its state through a deliberately narrow primitive:
//! durable, synchronous, origin-scoped string-to-string storage. Each record
//! collection (companies, reviews, salary reports, follows, blocked set) is
//! serialized as one JSON blob under one well-known key — see [`keys`].
//!
//! # Storage Backends
//!
//! All backends implement the [`KeyValueStore`] trait:
//!
//! - [`InMemoryKeyValueStore`] — `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. The store never interprets values — it is a pure key-value store.
//! 2. There are no multi-key operations and no transactions. Every update is
//!    a whole-blob read-modify-write by the caller.
//! 3. The store is shared mutable state across independent execution
//!    contexts of the same origin. Two contexts performing read-modify-write
//!    on the same key can lose one write (last writer wins). This is a
//!    documented property of the platform, reproduced here, not fixed.
//! 4. Every operation is a bounded synchronous call.
//!
//! # Failure Policy
//!
//! The [`Collection`] codec applies the subsystem-wide policy: reads that
//! fail (missing key, backend error, corrupt blob) degrade to the
//! collection's default value; writes that fail are logged at `warn` and
//! swallowed. There is no backend to reconcile from, so this tier favors
//! availability over strict durability.

pub mod collection;
pub mod error;
pub mod memory;
pub mod traits;

pub use collection::{keys, Collection};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryKeyValueStore;
pub use traits::KeyValueStore;
