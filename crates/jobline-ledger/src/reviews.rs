//! The company review ledger, most-recent-first.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use jobline_directory::{stats, CompanyDirectory, StatisticsPatch};
use jobline_store::{keys, Collection, KeyValueStore};
use jobline_types::{CompanyReview, ReviewId, MAX_RATING, MIN_RATING};

use crate::error::{LedgerError, Result};

/// Input for [`ReviewLedger::add`]; id and timestamp are assigned at insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewReview {
    pub company_name: String,
    pub rating: u8,
    pub body: String,
}

/// Append-only review records with the company rating aggregate.
///
/// Reviews are prepended, so the stored ledger reads most-recent-first and
/// `list_for` preserves that order. After each insert the ledger recomputes
/// `total_reviews` and `average_rating` over the company's full review set
/// and merges them onto the company record.
pub struct ReviewLedger {
    store: Arc<dyn KeyValueStore>,
    ledger: Collection<Vec<CompanyReview>>,
    directory: CompanyDirectory,
}

impl ReviewLedger {
    /// Bind a review ledger to the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            directory: CompanyDirectory::new(store.clone()),
            ledger: Collection::new(keys::REVIEWS),
            store,
        }
    }

    /// Insert a review and refresh the owning company's rating aggregate.
    ///
    /// Assigns a time-ordered unique id and the current timestamp. If no
    /// company record exists the review is still stored — orphaned — and no
    /// aggregate is written; that is accepted behavior, not an error.
    pub fn add(&self, new: NewReview) -> Result<CompanyReview> {
        if !(MIN_RATING..=MAX_RATING).contains(&new.rating) {
            return Err(LedgerError::RatingOutOfRange {
                rating: new.rating,
                min: MIN_RATING,
                max: MAX_RATING,
            });
        }

        let review = CompanyReview {
            id: ReviewId::new(),
            company_name: new.company_name,
            rating: new.rating,
            body: new.body,
            created_at: Utc::now(),
        };

        let mut ledger = self.ledger.load(self.store.as_ref());
        ledger.insert(0, review.clone());
        self.ledger.save(self.store.as_ref(), &ledger);

        let ratings: Vec<u8> = ledger
            .iter()
            .filter(|r| r.company_name == review.company_name)
            .map(|r| r.rating)
            .collect();
        let patch = StatisticsPatch::reviews(stats::mean_rating(&ratings), ratings.len() as u32);

        if self.directory.attach_review(&review.company_name, &review.id) {
            self.directory.merge_statistics(&review.company_name, &patch);
        } else {
            debug!(company = %review.company_name, review = %review.id, "review stored for unknown company");
        }

        Ok(review)
    }

    /// Reviews for one company, preserving ledger order (most-recent-first).
    pub fn list_for(&self, company_name: &str) -> Vec<CompanyReview> {
        self.ledger
            .load(self.store.as_ref())
            .into_iter()
            .filter(|r| r.company_name == company_name)
            .collect()
    }

    /// Every review in the ledger, most-recent-first.
    pub fn all(&self) -> Vec<CompanyReview> {
        self.ledger.load(self.store.as_ref())
    }
}

impl std::fmt::Debug for ReviewLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewLedger")
            .field("key", &self.ledger.key())
            .finish()
    }
}
