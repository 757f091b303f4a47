//! Aggregate arithmetic and the statistics merge patch.
//!
//! Every aggregate writer recomputes from its full source collection
//! filtered by company name, then merges only the fields it owns through
//! [`StatisticsPatch`]. Nothing here is incremental: a stale aggregate is
//! repaired by the next write to the same source collection.

use jobline_types::CompanyStatistics;

/// Rounded mean of the values; 0 when the slice is empty.
pub fn rounded_mean(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let sum: i64 = values.iter().sum();
    (sum as f64 / values.len() as f64).round() as i64
}

/// Mean rating rounded to one decimal place, half away from zero; 0.0 when
/// the slice is empty.
pub fn mean_rating(ratings: &[u8]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Partial statistics update carrying only the fields one writer owns.
///
/// Merging never touches a field the patch does not name, so concurrent
/// writers of different aggregates do not clear each other's values within
/// one execution context. (Across contexts the whole company record is still
/// subject to last-writer-wins.)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatisticsPatch {
    pub average_rating: Option<f64>,
    pub total_reviews: Option<u32>,
    pub average_reported_salary: Option<i64>,
    pub follow_count: Option<u32>,
}

impl StatisticsPatch {
    /// Patch written by the review ledger.
    pub fn reviews(average_rating: f64, total_reviews: u32) -> Self {
        Self {
            average_rating: Some(average_rating),
            total_reviews: Some(total_reviews),
            ..Self::default()
        }
    }

    /// Patch written by the salary ledger.
    pub fn reported_salary(average: i64) -> Self {
        Self {
            average_reported_salary: Some(average),
            ..Self::default()
        }
    }

    /// Patch written by the follow index.
    pub fn followers(count: u32) -> Self {
        Self {
            follow_count: Some(count),
            ..Self::default()
        }
    }

    /// Overwrite the named fields on `statistics`, leaving the rest alone.
    pub fn merge_into(&self, statistics: &mut CompanyStatistics) {
        if let Some(average_rating) = self.average_rating {
            statistics.average_rating = average_rating;
        }
        if let Some(total_reviews) = self.total_reviews {
            statistics.total_reviews = total_reviews;
        }
        if let Some(average) = self.average_reported_salary {
            statistics.average_reported_salary = average;
        }
        if let Some(count) = self.follow_count {
            statistics.follow_count = count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Means
    // -----------------------------------------------------------------------

    #[test]
    fn rounded_mean_of_empty_is_zero() {
        assert_eq!(rounded_mean(&[]), 0);
    }

    #[test]
    fn rounded_mean_rounds_half_away_from_zero() {
        // 15 / 2 = 7.5 -> 8
        assert_eq!(rounded_mean(&[7, 8]), 8);
        assert_eq!(rounded_mean(&[30_000, 45_000]), 37_500);
    }

    #[test]
    fn mean_rating_of_empty_is_zero() {
        assert_eq!(mean_rating(&[]), 0.0);
    }

    #[test]
    fn mean_rating_one_decimal() {
        // (5 + 4 + 4) / 3 = 4.333... -> 4.3
        assert_eq!(mean_rating(&[5, 4, 4]), 4.3);
        // (4 + 5) / 2 = 4.5 stays 4.5
        assert_eq!(mean_rating(&[4, 5]), 4.5);
        // (3 + 4 + 4 + 4) / 4 = 3.75 -> 3.8 (half away from zero)
        assert_eq!(mean_rating(&[3, 4, 4, 4]), 3.8);
    }

    // -----------------------------------------------------------------------
    // Patch merge
    // -----------------------------------------------------------------------

    #[test]
    fn review_patch_leaves_other_aggregates_alone() {
        let mut statistics = CompanyStatistics {
            average_reported_salary: 55_000,
            follow_count: 7,
            ..CompanyStatistics::default()
        };

        StatisticsPatch::reviews(4.5, 2).merge_into(&mut statistics);

        assert_eq!(statistics.average_rating, 4.5);
        assert_eq!(statistics.total_reviews, 2);
        assert_eq!(statistics.average_reported_salary, 55_000);
        assert_eq!(statistics.follow_count, 7);
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut statistics = CompanyStatistics {
            average_rating: 3.2,
            total_reviews: 9,
            ..CompanyStatistics::default()
        };
        let before = statistics.clone();
        StatisticsPatch::default().merge_into(&mut statistics);
        assert_eq!(statistics, before);
    }

    #[test]
    fn follower_patch_can_write_zero() {
        let mut statistics = CompanyStatistics {
            follow_count: 3,
            ..CompanyStatistics::default()
        };
        StatisticsPatch::followers(0).merge_into(&mut statistics);
        assert_eq!(statistics.follow_count, 0);
    }
}
