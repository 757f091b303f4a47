//! Follow relation entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One followed company in a user's follow set.
///
/// The follows collection maps user id to a list of these entries; the
/// (user, company) pair is unique, enforced by the writer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEntry {
    pub company_name: String,
    pub followed_at: DateTime<Utc>,
}

impl FollowEntry {
    /// A new entry stamped with the current time.
    pub fn now(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            followed_at: Utc::now(),
        }
    }
}
