//! The unified directory client handed to view layers.

use std::sync::Arc;

use jobline_directory::CompanyDirectory;
use jobline_ledger::{NewReview, NewSalaryReport, ReviewLedger, SalaryLedger};
use jobline_relations::{BlockList, FollowIndex};
use jobline_store::{InMemoryKeyValueStore, KeyValueStore};
use jobline_types::{Company, CompanyPatch, CompanyReview, FollowEntry, JobPosting, SalaryReport};

/// One handle over every directory subsystem, sharing a single store.
///
/// Construct one per execution context; contexts sharing the same store
/// observe each other's writes (and each other's races, see the crate
/// docs).
pub struct Jobline {
    directory: CompanyDirectory,
    reviews: ReviewLedger,
    salaries: SalaryLedger,
    follows: FollowIndex,
    blocks: BlockList,
}

impl Jobline {
    /// Build a client over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            directory: CompanyDirectory::new(store.clone()),
            reviews: ReviewLedger::new(store.clone()),
            salaries: SalaryLedger::new(store.clone()),
            follows: FollowIndex::new(store.clone()),
            blocks: BlockList::new(store),
        }
    }

    /// Build a client over a fresh private in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    // ---------------------------------------------------------------
    // Companies
    // ---------------------------------------------------------------

    /// Snapshot of one company record.
    pub fn company(&self, name: &str) -> Option<Company> {
        self.directory.get(name)
    }

    /// Snapshot of every company record, sorted by name.
    pub fn companies(&self) -> Vec<Company> {
        self.directory.all()
    }

    /// Companies not in the blocked set, sorted by name.
    ///
    /// Filtering uses the authoritative set, not the advisory
    /// `is_blocked` flag on the records.
    pub fn visible_companies(&self) -> Vec<Company> {
        let blocked = self.blocks.list_blocked();
        self.directory
            .all()
            .into_iter()
            .filter(|company| !blocked.contains(&company.name))
            .collect()
    }

    /// Merge a partial update onto a company record, creating it if absent.
    pub fn update_company(&self, name: &str, patch: &CompanyPatch) {
        self.directory.upsert(name, patch);
    }

    /// Seed starter records for postings whose company is unknown.
    pub fn ingest_postings(&self, postings: &[JobPosting]) {
        self.directory.bulk_backfill(postings);
    }

    /// Count a user report against a company. Returns `false` if no record
    /// exists.
    pub fn report_company(&self, name: &str) -> bool {
        self.directory.record_report(name)
    }

    // ---------------------------------------------------------------
    // Reviews
    // ---------------------------------------------------------------

    /// Add a review and refresh the company's rating aggregate.
    pub fn add_review(&self, new: NewReview) -> jobline_ledger::Result<CompanyReview> {
        self.reviews.add(new)
    }

    /// Reviews for one company, most-recent-first.
    pub fn reviews_for(&self, company_name: &str) -> Vec<CompanyReview> {
        self.reviews.list_for(company_name)
    }

    // ---------------------------------------------------------------
    // Salaries
    // ---------------------------------------------------------------

    /// Add a salary report and refresh the company's reported-salary
    /// aggregate. Out-of-range amounts fail with a validation error.
    pub fn report_salary(&self, new: NewSalaryReport) -> jobline_ledger::Result<SalaryReport> {
        self.salaries.report(new)
    }

    /// Salary reports for one company, in insertion order.
    pub fn salaries_for(&self, company_name: &str) -> Vec<SalaryReport> {
        self.salaries.list_for(company_name)
    }

    /// Rounded mean reported salary; 0 with no reports.
    pub fn average_salary_for(&self, company_name: &str) -> i64 {
        self.salaries.average_for(company_name)
    }

    // ---------------------------------------------------------------
    // Follows
    // ---------------------------------------------------------------

    /// Record a follow; idempotent per (user, company) pair.
    pub fn follow(&self, company_name: &str, user_id: &str) {
        self.follows.follow(company_name, user_id);
    }

    /// Remove a follow if present.
    pub fn unfollow(&self, company_name: &str, user_id: &str) {
        self.follows.unfollow(company_name, user_id);
    }

    /// Returns `true` if the user follows the company.
    pub fn is_followed(&self, company_name: &str, user_id: &str) -> bool {
        self.follows.is_followed(company_name, user_id)
    }

    /// Companies followed by one user, in stable storage order.
    pub fn followed_companies(&self, user_id: &str) -> Vec<FollowEntry> {
        self.follows.list_for(user_id)
    }

    // ---------------------------------------------------------------
    // Blocks
    // ---------------------------------------------------------------

    /// Block a company globally (set plus advisory record flag).
    pub fn block_company(&self, company_name: &str) {
        self.blocks.block(company_name);
    }

    /// Unblock a company globally.
    pub fn unblock_company(&self, company_name: &str) {
        self.blocks.unblock(company_name);
    }

    /// Returns `true` if the company is in the blocked set.
    pub fn is_company_blocked(&self, company_name: &str) -> bool {
        self.blocks.is_blocked(company_name)
    }

    /// The blocked set, sorted by name.
    pub fn blocked_companies(&self) -> Vec<String> {
        self.blocks.list_blocked()
    }
}

impl std::fmt::Debug for Jobline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Jobline").finish()
    }
}
