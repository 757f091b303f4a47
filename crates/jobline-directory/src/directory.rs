//! The company directory over the shared key-value store.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use jobline_store::{keys, Collection, KeyValueStore};
use jobline_types::{Company, CompanyPatch, JobPosting, ReviewId};

use crate::stats::{rounded_mean, StatisticsPatch};

/// CRUD and merge semantics for company records.
///
/// The whole directory is one JSON blob (name → record) rewritten on every
/// mutation. A reader concurrent with a writer in another execution context
/// can lose a write — last writer wins; the only merge applied is the
/// field-level "non-empty wins" rule inside `upsert` itself.
pub struct CompanyDirectory {
    store: Arc<dyn KeyValueStore>,
    companies: Collection<BTreeMap<String, Company>>,
}

impl CompanyDirectory {
    /// Bind a directory to the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            companies: Collection::new(keys::COMPANIES),
        }
    }

    // ---------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------

    /// Look up a company by its exact name.
    ///
    /// Never fails: malformed storage degrades to an empty directory and
    /// the lookup returns `None`.
    pub fn get(&self, name: &str) -> Option<Company> {
        self.companies.load(self.store.as_ref()).remove(name)
    }

    /// Returns `true` if a record exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.companies.load(self.store.as_ref()).contains_key(name)
    }

    /// Snapshot of every company record, sorted by name.
    pub fn all(&self) -> Vec<Company> {
        self.companies
            .load(self.store.as_ref())
            .into_values()
            .collect()
    }

    // ---------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------

    /// Merge a partial update onto the record for `name`, creating a fresh
    /// default record if none exists.
    ///
    /// Field rule: later non-empty value wins, otherwise the existing value
    /// is kept. A record is never deleted and no field is null-cleared by
    /// omission.
    pub fn upsert(&self, name: &str, patch: &CompanyPatch) {
        let mut companies = self.companies.load(self.store.as_ref());
        let company = companies
            .entry(name.to_string())
            .or_insert_with(|| Company::new(name));
        company.apply(patch);
        self.companies.save(self.store.as_ref(), &companies);
        debug!(company = %name, "company upserted");
    }

    /// Seed starter records for every posting whose company is not yet in
    /// the directory.
    ///
    /// Existing companies are left untouched, so re-ingesting the same
    /// posting set is a no-op. The starter record derives its address list
    /// from posting locations (first-appearance order, deduplicated) and
    /// seeds `average_salary` / `total_job_posts` from the company's own
    /// non-event postings.
    pub fn bulk_backfill(&self, postings: &[JobPosting]) {
        let mut companies = self.companies.load(self.store.as_ref());

        let mut grouped: BTreeMap<&str, Vec<&JobPosting>> = BTreeMap::new();
        for posting in postings {
            grouped
                .entry(posting.company_name.as_str())
                .or_default()
                .push(posting);
        }

        let mut seeded = 0usize;
        for (name, postings) in grouped {
            if companies.contains_key(name) {
                continue;
            }
            companies.insert(name.to_string(), starter_company(name, &postings));
            seeded += 1;
        }

        if seeded > 0 {
            self.companies.save(self.store.as_ref(), &companies);
        }
        debug!(seeded, total = postings.len(), "posting backfill complete");
    }

    /// Flip the advisory moderation flag on the company record.
    ///
    /// Returns `false` if no record exists; the authoritative blocked set is
    /// maintained by the block list, not here.
    pub fn set_blocked(&self, name: &str, blocked: bool) -> bool {
        self.update(name, |company| company.is_blocked = blocked)
    }

    /// Count one user report against the company.
    pub fn record_report(&self, name: &str) -> bool {
        self.update(name, |company| company.report_count += 1)
    }

    /// Prepend a review id to the company's embedded review list.
    pub fn attach_review(&self, name: &str, review_id: &ReviewId) -> bool {
        self.update(name, |company| {
            company.review_ids.insert(0, review_id.clone());
        })
    }

    /// The shared recompute-and-merge routine: overwrite only the aggregate
    /// fields named by `patch` and rewrite the company record.
    ///
    /// Returns `false` when no record exists for `name` — the source record
    /// that triggered the recompute stays in its own collection, orphaned,
    /// and no aggregate is written.
    pub fn merge_statistics(&self, name: &str, patch: &StatisticsPatch) -> bool {
        self.update(name, |company| patch.merge_into(&mut company.statistics))
    }

    /// Load, mutate, and rewrite one record. Returns `false` when absent.
    fn update<F: FnOnce(&mut Company)>(&self, name: &str, apply: F) -> bool {
        let mut companies = self.companies.load(self.store.as_ref());
        let Some(company) = companies.get_mut(name) else {
            debug!(company = %name, "update skipped; no record");
            return false;
        };
        apply(company);
        self.companies.save(self.store.as_ref(), &companies);
        true
    }
}

impl std::fmt::Debug for CompanyDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompanyDirectory")
            .field("key", &self.companies.key())
            .finish()
    }
}

/// Derive a starter record for a company seen only through its postings.
fn starter_company(name: &str, postings: &[&JobPosting]) -> Company {
    let mut company = Company::new(name);
    company.biography = format!("{name} has not published a company profile yet.");

    for posting in postings {
        if !posting.location.is_empty() && !company.addresses.contains(&posting.location) {
            company.addresses.push(posting.location.clone());
        }
        company.posting_ids.push(posting.id.clone());
    }

    let job_midpoints: Vec<i64> = postings
        .iter()
        .filter(|p| !p.is_event)
        .map(|p| p.salary_midpoint())
        .collect();
    company.statistics.total_job_posts = job_midpoints.len() as u32;
    company.statistics.average_salary = rounded_mean(&job_midpoints);

    company
}
