//! Append-only ledgers for the JobLine company directory.
//!
//! Two collections live here:
//!
//! - [`ReviewLedger`] — company reviews, kept most-recent-first; ledger
//!   order is a product invariant, not an implementation detail
//! - [`SalaryLedger`] — salary reports, kept in insertion order, with
//!   inclusive bounds validation at insert time
//!
//! Records are immutable once written; there is no update or delete. After
//! every insert the owning ledger re-reads its full collection, filters by
//! company name, re-derives the aggregate, and merges it onto the company
//! record through the directory. The two writes (ledger blob, companies
//! blob) are not coordinated — see the crate-level notes in `jobline-store`
//! for the cross-context hazard this inherits.
//!
//! Validation failures ([`LedgerError`]) propagate to the caller; storage
//! failures never do.

pub mod error;
pub mod reviews;
pub mod salaries;

pub use error::{LedgerError, Result};
pub use reviews::{NewReview, ReviewLedger};
pub use salaries::{NewSalaryReport, SalaryLedger};
