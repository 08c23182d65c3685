//! Recent searches

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::warn;

use crate::storage::{self, KeyValueStore, StoreError};

/// Storage key for the recent-searches blob.
pub const RECENT_SEARCHES_KEY: &str = "recent_searches_v1";

/// Most recent searches are kept, newest first, up to this many.
pub const MAX_RECENTS: usize = 10;

/// Bounded most-recent-first search history with case-insensitive
/// de-duplication, mirrored to the key-value store.
#[derive(Debug)]
pub struct RecentSearches {
    entries: SmallVec<[String; MAX_RECENTS]>,
    store: Arc<dyn KeyValueStore>,
}

impl RecentSearches {
    /// Hydrate the history, starting empty when the blob is missing or
    /// malformed.
    #[must_use]
    pub fn hydrate(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match storage::get_json::<Vec<String>>(store.as_ref(), RECENT_SEARCHES_KEY) {
            Ok(Some(saved)) => saved.into_iter().take(MAX_RECENTS).collect(),
            Ok(None) => SmallVec::new(),
            Err(err) => {
                warn!(%err, "recent searches unreadable, starting empty");
                SmallVec::new()
            }
        };

        Self { entries, store }
    }

    /// Record a search term at the front of the history.
    ///
    /// Whitespace-only terms are ignored. An existing entry matching
    /// case-insensitively moves to the front (keeping the new spelling)
    /// instead of duplicating, and the history is capped at
    /// [`MAX_RECENTS`].
    ///
    /// # Errors
    ///
    /// Returns the blob write failure; the in-memory history has already
    /// been updated.
    pub fn add(&mut self, term: &str) -> Result<(), StoreError> {
        let term = term.trim();

        if term.is_empty() {
            return Ok(());
        }

        let lowered = term.to_lowercase();
        self.entries
            .retain(|existing| existing.to_lowercase() != lowered);
        self.entries.insert(0, term.to_owned());
        self.entries.truncate(MAX_RECENTS);

        self.persist()
    }

    /// Forget the whole history.
    ///
    /// # Errors
    ///
    /// Returns the blob write failure; the in-memory history has already
    /// been cleared.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.persist()
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn persist(&self) -> Result<(), StoreError> {
        let result = storage::set_json(
            self.store.as_ref(),
            RECENT_SEARCHES_KEY,
            &self.entries.to_vec(),
        );

        if let Err(err) = &result {
            warn!(%err, "recent searches write failed");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::storage::InMemoryStore;

    use super::*;

    fn fresh() -> RecentSearches {
        RecentSearches::hydrate(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn newest_terms_come_first() -> TestResult {
        let mut recents = fresh();

        recents.add("bananas")?;
        recents.add("milk")?;

        assert_eq!(recents.entries(), ["milk", "bananas"]);

        Ok(())
    }

    #[test]
    fn case_insensitive_repeat_moves_to_front_without_growing() -> TestResult {
        let mut recents = fresh();

        recents.add("bananas")?;
        recents.add("milk")?;
        recents.add("BANANAS")?;

        assert_eq!(recents.entries(), ["BANANAS", "milk"]);

        Ok(())
    }

    #[test]
    fn history_is_capped_at_ten() -> TestResult {
        let mut recents = fresh();

        for term in [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k",
        ] {
            recents.add(term)?;
        }

        assert_eq!(recents.entries().len(), MAX_RECENTS);
        assert_eq!(recents.entries().first().map(String::as_str), Some("k"));
        assert!(!recents.entries().iter().any(|t| t == "a"));

        Ok(())
    }

    #[test]
    fn blank_terms_are_ignored() -> TestResult {
        let mut recents = fresh();

        recents.add("   ")?;

        assert!(recents.entries().is_empty());

        Ok(())
    }

    #[test]
    fn history_survives_rehydration() -> TestResult {
        let store = Arc::new(InMemoryStore::new());

        let mut recents = RecentSearches::hydrate(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        recents.add("spinach")?;
        recents.add("eggs")?;

        let restored = RecentSearches::hydrate(store);

        assert_eq!(restored.entries(), ["eggs", "spinach"]);

        Ok(())
    }

    #[test]
    fn clear_empties_the_history() -> TestResult {
        let mut recents = fresh();
        recents.add("bread")?;

        recents.clear()?;

        assert!(recents.entries().is_empty());

        Ok(())
    }
}
