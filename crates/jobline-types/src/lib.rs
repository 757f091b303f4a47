//! Record types for the JobLine company directory.
//!
//! This crate provides the persisted record shapes shared by every other
//! directory crate. Five collections are stored, each as one JSON blob in the
//! key-value store:
//!
//! - [`Company`] — the central entity; carries the [`CompanyStatistics`]
//!   aggregate that the ledgers and relation indexes keep up to date
//! - [`CompanyReview`] — immutable review records, most-recent-first
//! - [`SalaryReport`] — immutable salary reports, insertion order
//! - [`FollowEntry`] — per-user follow relations
//! - the blocked-company set (plain `Vec<String>`, set semantics by writer)
//!
//! [`JobPosting`] is the one inbound shape: the bulk-backfill input handed
//! over by the rest of the application, never persisted here.
//!
//! Every persisted field is `#[serde(default)]`-tolerant so blobs written by
//! older versions of the schema still deserialize.

pub mod company;
pub mod posting;
pub mod relation;
pub mod review;
pub mod salary;

pub use company::{Company, CompanyPatch, CompanyStatistics, ProfileColors};
pub use posting::JobPosting;
pub use relation::FollowEntry;
pub use review::{CompanyReview, ReviewId, MAX_RATING, MIN_RATING};
pub use salary::{ReportId, SalaryReport, MAX_SALARY_AMOUNT, MIN_SALARY_AMOUNT};
