//! Per-user follow sets and the follow-count aggregate.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use jobline_directory::{CompanyDirectory, StatisticsPatch};
use jobline_store::{keys, Collection, KeyValueStore};
use jobline_types::FollowEntry;

/// Map of user id to that user's followed companies.
type FollowMap = BTreeMap<String, Vec<FollowEntry>>;

/// Follow relations between users and companies.
///
/// A user follows a company at most once; repeat calls are no-ops. After
/// any change the index recounts the company's distinct followers across
/// the whole map and merges the count onto the company record.
pub struct FollowIndex {
    store: Arc<dyn KeyValueStore>,
    follows: Collection<FollowMap>,
    directory: CompanyDirectory,
}

impl FollowIndex {
    /// Bind a follow index to the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            directory: CompanyDirectory::new(store.clone()),
            follows: Collection::new(keys::FOLLOWS),
            store,
        }
    }

    /// Record that `user_id` follows `company_name`.
    ///
    /// Idempotent: if the pair already exists nothing is written.
    pub fn follow(&self, company_name: &str, user_id: &str) {
        let mut follows = self.follows.load(self.store.as_ref());
        let entries = follows.entry(user_id.to_string()).or_default();
        if entries.iter().any(|e| e.company_name == company_name) {
            debug!(company = %company_name, user = %user_id, "already followed");
            return;
        }
        entries.push(FollowEntry::now(company_name));
        self.follows.save(self.store.as_ref(), &follows);

        self.refresh_count(company_name, &follows);
    }

    /// Remove the (user, company) pair if present.
    pub fn unfollow(&self, company_name: &str, user_id: &str) {
        let mut follows = self.follows.load(self.store.as_ref());
        let Some(entries) = follows.get_mut(user_id) else {
            return;
        };
        let before = entries.len();
        entries.retain(|e| e.company_name != company_name);
        if entries.len() == before {
            return;
        }
        if entries.is_empty() {
            follows.remove(user_id);
        }
        self.follows.save(self.store.as_ref(), &follows);

        self.refresh_count(company_name, &follows);
    }

    /// Returns `true` if `user_id` currently follows `company_name`.
    pub fn is_followed(&self, company_name: &str, user_id: &str) -> bool {
        self.follows
            .load(self.store.as_ref())
            .get(user_id)
            .is_some_and(|entries| entries.iter().any(|e| e.company_name == company_name))
    }

    /// The companies `user_id` follows, in stable storage order.
    ///
    /// Callers sort as needed; no ordering is guaranteed beyond what the
    /// blob preserves.
    pub fn list_for(&self, user_id: &str) -> Vec<FollowEntry> {
        self.follows
            .load(self.store.as_ref())
            .remove(user_id)
            .unwrap_or_default()
    }

    /// Number of distinct users currently following `company_name`.
    pub fn follower_count(&self, company_name: &str) -> u32 {
        count_followers(&self.follows.load(self.store.as_ref()), company_name)
    }

    /// Recompute the follower count from the full map and merge it onto the
    /// company record.
    fn refresh_count(&self, company_name: &str, follows: &FollowMap) {
        let count = count_followers(follows, company_name);
        if !self
            .directory
            .merge_statistics(company_name, &StatisticsPatch::followers(count))
        {
            debug!(company = %company_name, "follow change for unknown company");
        }
    }
}

fn count_followers(follows: &FollowMap, company_name: &str) -> u32 {
    follows
        .values()
        .filter(|entries| entries.iter().any(|e| e.company_name == company_name))
        .count() as u32
}

impl std::fmt::Debug for FollowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FollowIndex")
            .field("key", &self.follows.key())
            .finish()
    }
}
