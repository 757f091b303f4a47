//! Immutable company review records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest accepted review rating (inclusive).
pub const MIN_RATING: u8 = 1;
/// Highest accepted review rating (inclusive).
pub const MAX_RATING: u8 = 5;

/// Unique identifier for a review (UUID v7 for time-ordering).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReviewId(uuid::Uuid);

impl ReviewId {
    /// Generate a new time-ordered review ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReviewId({})", self.short_id())
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single review in the ledger. Immutable once created.
///
/// `company_name` is a weak reference: the review stays valid even when no
/// company record with that name exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyReview {
    pub id: ReviewId,
    pub company_name: String,
    /// Bounded scale, [`MIN_RATING`]..=[`MAX_RATING`].
    pub rating: u8,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        use std::collections::HashSet;

        let ids: HashSet<ReviewId> = (0..64).map(|_| ReviewId::new()).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn short_id_is_eight_chars() {
        assert_eq!(ReviewId::new().short_id().len(), 8);
    }

    #[test]
    fn serde_roundtrip() {
        let review = CompanyReview {
            id: ReviewId::new(),
            company_name: "Acme".into(),
            rating: 4,
            body: "Solid onboarding, slow reviews.".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&review).unwrap();
        let parsed: CompanyReview = serde_json::from_str(&json).unwrap();
        assert_eq!(review, parsed);
    }
}
