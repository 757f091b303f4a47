//! The company directory: the central collection every other JobLine
//! subsystem attaches aggregates to.
//!
//! [`CompanyDirectory`] owns the companies blob — a map from raw company
//! name to [`jobline_types::Company`] — and provides:
//!
//! - lookup and listing that never fail (malformed storage degrades to an
//!   empty directory)
//! - `upsert` with field-level "later non-empty value wins" merge
//! - `bulk_backfill`, the lazy-creation path that seeds starter records from
//!   ingested job postings without ever overwriting an existing company
//! - [`stats::StatisticsPatch`] and [`CompanyDirectory::merge_statistics`],
//!   the one recompute-and-merge routine the review ledger, salary ledger,
//!   and follow index all go through after mutating their own collection
//!
//! Every mutation is a whole-blob read-modify-write; there is no partial
//! update primitive underneath. Failure policy: reads degrade, writes are
//! logged and swallowed, so none of these operations return a storage error.

pub mod directory;
pub mod stats;

pub use directory::CompanyDirectory;
pub use stats::StatisticsPatch;
