//! High-level SDK for the JobLine company directory.
//!
//! [`Jobline`] composes the directory, both ledgers, and the relation
//! indexes over one shared [`jobline_store::KeyValueStore`] and exposes the
//! surface the view layers consume. Every accessor returns a plain snapshot
//! — no live references into storage.
//!
//! # Concurrency
//!
//! The underlying store is shared across independent execution contexts of
//! the same origin, with no locking and no multi-key transactions. Two
//! contexts mutating the same company concurrently can lose an update (last
//! writer wins), and a review insert racing a salary insert can silently
//! discard the other's aggregate change. This is a documented limitation of
//! the storage tier, inherited deliberately; aggregates self-heal on the
//! next write to their source collection.

pub mod client;

pub use client::Jobline;
