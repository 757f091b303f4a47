//! Follow and block relations for JobLine companies.
//!
//! - [`FollowIndex`] — per-user follow sets (a map of user id to followed
//!   companies). Inserts are idempotent; every change recomputes the
//!   company's `follow_count` as the number of distinct followers.
//! - [`BlockList`] — a process-wide set of blocked company names, not
//!   per-user. Block state is deliberately duplicated: the set here is
//!   authoritative for filtering, while `Company.is_blocked` is an advisory
//!   display flag written alongside it. The two can disagree when the
//!   company record is absent at block time; that divergence is part of the
//!   carried-over design, not repaired here.

pub mod block;
pub mod follow;

pub use block::BlockList;
pub use follow::FollowIndex;
