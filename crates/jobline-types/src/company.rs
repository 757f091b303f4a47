//! The central company record and its partial-update merge semantics.
//!
//! A company is identified by its raw display name, exactly as entered:
//! case- and whitespace-sensitive. Nothing normalizes the key; two spellings
//! of the same employer are two records.

use serde::{Deserialize, Serialize};

use crate::review::ReviewId;

/// Profile accent colors chosen by the company editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileColors {
    pub primary: String,
    pub secondary: String,
}

/// Counts and derived averages attached to a company record.
///
/// The count fields are written by ingestion and application flows. The
/// derived fields are each a pure function of one source collection filtered
/// by company name:
///
/// - `average_rating` / `total_reviews` — the review ledger
/// - `average_reported_salary` — the salary ledger
/// - `follow_count` — the follow index
/// - `average_salary` — the company's own job postings, seeded at backfill
///
/// Writers recompute from the full source collection on every mutation, so a
/// stale value is repaired by the next write to the same source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyStatistics {
    #[serde(default)]
    pub hired: u32,
    #[serde(default)]
    pub interviewed: u32,
    #[serde(default)]
    pub rejected: u32,
    #[serde(default)]
    pub total_job_posts: u32,
    #[serde(default)]
    pub total_applications: u32,
    /// Rounded mean of `(salary_min + salary_max) / 2` over job postings.
    #[serde(default)]
    pub average_salary: i64,
    /// Rounded mean over the salary ledger for this company.
    #[serde(default)]
    pub average_reported_salary: i64,
    /// Mean review rating, one decimal place, half-away-from-zero.
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    /// Distinct users currently following this company.
    #[serde(default)]
    pub follow_count: u32,
}

/// A company record in the directory.
///
/// Once created a company is never deleted by normal flow; it only ever
/// accumulates. `is_blocked` is the global moderation flag mirrored from the
/// blocked-company set — the set is authoritative for filtering, the flag is
/// advisory for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub profile_colors: Option<ProfileColors>,
    #[serde(default)]
    pub statistics: CompanyStatistics,
    /// Ids of this company's reviews, most-recent-first (embedding
    /// materialized by the review ledger).
    #[serde(default)]
    pub review_ids: Vec<ReviewId>,
    /// Ids of postings ingested for this company, first-appearance order.
    #[serde(default)]
    pub posting_ids: Vec<String>,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub report_count: u32,
}

impl Company {
    /// A fresh record with only the name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            biography: String::new(),
            addresses: Vec::new(),
            logo: None,
            website: None,
            industry: None,
            founded_year: None,
            company_size: None,
            profile_colors: None,
            statistics: CompanyStatistics::default(),
            review_ids: Vec::new(),
            posting_ids: Vec::new(),
            is_blocked: false,
            report_count: 0,
        }
    }

    /// Merge a partial update onto this record.
    ///
    /// Per-field rule: a later non-empty value wins, otherwise the existing
    /// value is kept. An empty string or empty list in the patch counts as
    /// absent, so a patch can never null-clear a field by omission.
    pub fn apply(&mut self, patch: &CompanyPatch) {
        if let Some(biography) = non_empty(&patch.biography) {
            self.biography = biography.clone();
        }
        if let Some(addresses) = &patch.addresses {
            if !addresses.is_empty() {
                self.addresses = addresses.clone();
            }
        }
        merge_optional(&mut self.logo, &patch.logo);
        merge_optional(&mut self.website, &patch.website);
        merge_optional(&mut self.industry, &patch.industry);
        if let Some(year) = patch.founded_year {
            self.founded_year = Some(year);
        }
        merge_optional(&mut self.company_size, &patch.company_size);
        if let Some(colors) = &patch.profile_colors {
            self.profile_colors = Some(colors.clone());
        }
        if let Some(statistics) = &patch.statistics {
            self.statistics = statistics.clone();
        }
    }
}

/// Partial company update for [`Company::apply`].
///
/// Every field is optional; absent fields leave the record untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub biography: Option<String>,
    pub addresses: Option<Vec<String>>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub founded_year: Option<i32>,
    pub company_size: Option<String>,
    pub profile_colors: Option<ProfileColors>,
    /// Wholesale statistics replacement for administrative imports; the
    /// aggregate writers use the statistics merge instead.
    pub statistics: Option<CompanyStatistics>,
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.is_empty())
}

fn merge_optional(target: &mut Option<String>, incoming: &Option<String>) {
    if let Some(value) = non_empty(incoming) {
        *target = Some(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // -----------------------------------------------------------------------
    // Merge semantics
    // -----------------------------------------------------------------------

    #[test]
    fn patches_accumulate_without_clobbering() {
        let mut company = Company::new("Acme");
        company.apply(&CompanyPatch {
            logo: Some("x".into()),
            ..CompanyPatch::default()
        });
        company.apply(&CompanyPatch {
            biography: Some("y".into()),
            ..CompanyPatch::default()
        });

        assert_eq!(company.logo.as_deref(), Some("x"));
        assert_eq!(company.biography, "y");
    }

    #[test]
    fn empty_string_does_not_clear() {
        let mut company = Company::new("Acme");
        company.apply(&CompanyPatch {
            website: Some("https://acme.example".into()),
            ..CompanyPatch::default()
        });
        company.apply(&CompanyPatch {
            website: Some(String::new()),
            ..CompanyPatch::default()
        });

        assert_eq!(company.website.as_deref(), Some("https://acme.example"));
    }

    #[test]
    fn empty_address_list_does_not_clear() {
        let mut company = Company::new("Acme");
        company.apply(&CompanyPatch {
            addresses: Some(vec!["Berlin".into()]),
            ..CompanyPatch::default()
        });
        company.apply(&CompanyPatch {
            addresses: Some(Vec::new()),
            ..CompanyPatch::default()
        });

        assert_eq!(company.addresses, vec!["Berlin".to_string()]);
    }

    #[test]
    fn later_non_empty_value_wins() {
        let mut company = Company::new("Acme");
        company.apply(&CompanyPatch {
            industry: Some("Retail".into()),
            ..CompanyPatch::default()
        });
        company.apply(&CompanyPatch {
            industry: Some("Logistics".into()),
            ..CompanyPatch::default()
        });

        assert_eq!(company.industry.as_deref(), Some("Logistics"));
    }

    #[test]
    fn default_patch_is_identity() {
        let mut company = Company::new("Acme");
        company.apply(&CompanyPatch {
            biography: Some("bio".into()),
            founded_year: Some(1999),
            ..CompanyPatch::default()
        });
        let before = company.clone();
        company.apply(&CompanyPatch::default());
        assert_eq!(company, before);
    }

    proptest! {
        #[test]
        fn applying_a_patch_twice_equals_once(
            biography in ".{0,12}",
            logo in proptest::option::of(".{0,12}"),
            year in proptest::option::of(1800..2030i32),
        ) {
            let patch = CompanyPatch {
                biography: Some(biography),
                logo,
                founded_year: year,
                ..CompanyPatch::default()
            };
            let mut once = Company::new("Acme");
            once.apply(&patch);
            let mut twice = once.clone();
            twice.apply(&patch);
            prop_assert_eq!(once, twice);
        }
    }

    // -----------------------------------------------------------------------
    // Schema evolution
    // -----------------------------------------------------------------------

    #[test]
    fn old_blob_without_new_fields_deserializes() {
        // A record persisted before statistics/report_count existed.
        let json = r#"{"name":"Acme","biography":"old","addresses":["Berlin"]}"#;
        let company: Company = serde_json::from_str(json).unwrap();

        assert_eq!(company.name, "Acme");
        assert_eq!(company.statistics, CompanyStatistics::default());
        assert_eq!(company.report_count, 0);
        assert!(!company.is_blocked);
        assert!(company.review_ids.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let mut company = Company::new("Acme");
        company.statistics.average_rating = 4.5;
        company.statistics.follow_count = 3;
        company.profile_colors = Some(ProfileColors {
            primary: "#102030".into(),
            secondary: "#405060".into(),
        });

        let json = serde_json::to_string(&company).unwrap();
        let parsed: Company = serde_json::from_str(&json).unwrap();
        assert_eq!(company, parsed);
    }
}
