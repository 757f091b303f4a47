//! The process-wide blocked-company set.

use std::sync::Arc;

use tracing::debug;

use jobline_directory::CompanyDirectory;
use jobline_store::{keys, Collection, KeyValueStore};

/// Global moderation set of blocked company names.
///
/// Not per-user. Membership here is authoritative for filtering; the
/// `is_blocked` flag on the company record is advisory and written together
/// with the set. When no company record exists at block time only the set
/// is updated, so the two representations can disagree.
pub struct BlockList {
    store: Arc<dyn KeyValueStore>,
    blocked: Collection<Vec<String>>,
    directory: CompanyDirectory,
}

impl BlockList {
    /// Bind a block list to the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            directory: CompanyDirectory::new(store.clone()),
            blocked: Collection::new(keys::BLOCKED),
            store,
        }
    }

    /// Add `company_name` to the blocked set and raise the company flag.
    ///
    /// Idempotent on the set; the flag is re-asserted either way.
    pub fn block(&self, company_name: &str) {
        let mut blocked = self.blocked.load(self.store.as_ref());
        if !blocked.iter().any(|name| name == company_name) {
            blocked.push(company_name.to_string());
            self.blocked.save(self.store.as_ref(), &blocked);
        }
        if !self.directory.set_blocked(company_name, true) {
            debug!(company = %company_name, "blocked a company with no directory record");
        }
    }

    /// Remove `company_name` from the blocked set and clear the company flag.
    pub fn unblock(&self, company_name: &str) {
        let mut blocked = self.blocked.load(self.store.as_ref());
        let before = blocked.len();
        blocked.retain(|name| name != company_name);
        if blocked.len() != before {
            self.blocked.save(self.store.as_ref(), &blocked);
        }
        self.directory.set_blocked(company_name, false);
    }

    /// Returns `true` if `company_name` is in the blocked set.
    pub fn is_blocked(&self, company_name: &str) -> bool {
        self.blocked
            .load(self.store.as_ref())
            .iter()
            .any(|name| name == company_name)
    }

    /// The blocked set, sorted by name.
    pub fn list_blocked(&self) -> Vec<String> {
        let mut blocked = self.blocked.load(self.store.as_ref());
        blocked.sort();
        blocked
    }
}

impl std::fmt::Debug for BlockList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockList")
            .field("key", &self.blocked.key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use jobline_store::InMemoryKeyValueStore;
    use jobline_types::CompanyPatch;

    use super::*;

    fn setup() -> (CompanyDirectory, BlockList) {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let directory = CompanyDirectory::new(store.clone());
        directory.upsert("Acme", &CompanyPatch::default());
        (directory, BlockList::new(store))
    }

    // -----------------------------------------------------------------------
    // Idempotence
    // -----------------------------------------------------------------------

    #[test]
    fn blocking_twice_equals_blocking_once() {
        let (directory, blocks) = setup();
        blocks.block("Acme");
        blocks.block("Acme");

        assert_eq!(blocks.list_blocked(), vec!["Acme"]);
        assert!(directory.get("Acme").unwrap().is_blocked);
    }

    #[test]
    fn unblocking_twice_equals_unblocking_once() {
        let (directory, blocks) = setup();
        blocks.block("Acme");
        blocks.unblock("Acme");
        blocks.unblock("Acme");

        assert!(!blocks.is_blocked("Acme"));
        assert!(blocks.list_blocked().is_empty());
        assert!(!directory.get("Acme").unwrap().is_blocked);
    }

    // -----------------------------------------------------------------------
    // Set and flag coupling
    // -----------------------------------------------------------------------

    #[test]
    fn block_updates_set_and_flag_together() {
        let (directory, blocks) = setup();
        blocks.block("Acme");

        assert!(blocks.is_blocked("Acme"));
        assert!(directory.get("Acme").unwrap().is_blocked);

        blocks.unblock("Acme");
        assert!(!blocks.is_blocked("Acme"));
        assert!(!directory.get("Acme").unwrap().is_blocked);
    }

    #[test]
    fn blocking_without_a_record_updates_only_the_set() {
        let (directory, blocks) = setup();
        blocks.block("Ghost");

        // The set is authoritative; the advisory flag has nowhere to live.
        assert!(blocks.is_blocked("Ghost"));
        assert!(directory.get("Ghost").is_none());
    }

    #[test]
    fn list_blocked_is_sorted() {
        let (directory, blocks) = setup();
        directory.upsert("Zeta", &CompanyPatch::default());
        blocks.block("Zeta");
        blocks.block("Acme");

        assert_eq!(blocks.list_blocked(), vec!["Acme", "Zeta"]);
    }

    #[test]
    fn is_blocked_for_unknown_company_is_false() {
        let (_directory, blocks) = setup();
        assert!(!blocks.is_blocked("Nobody"));
    }
}
