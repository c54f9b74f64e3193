use crate::models::{Mentor, QueryResult, QueryState};
use crate::core::query;
use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Key for one memoised browse result
///
/// The catalog is fixed for the lifetime of the process, so the query state
/// and page size fully determine the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryCacheKey {
    pub state: QueryState,
    pub page_size: usize,
}

/// In-memory memo of browse results
///
/// Purely an optimisation: a miss recomputes the same result the engine
/// would have produced.
#[derive(Clone)]
pub struct QueryCache {
    results: Cache<QueryCacheKey, Arc<QueryResult>>,
    ttl_secs: u64,
}

impl QueryCache {
    /// Create a new cache holding at most `max_entries` results
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let results = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { results, ttl_secs }
    }

    pub fn get(&self, key: &QueryCacheKey) -> Option<Arc<QueryResult>> {
        let hit = self.results.get(key);
        if hit.is_some() {
            tracing::trace!("Query cache hit: {:?}", key.state);
        }
        hit
    }

    /// Return the cached result or run the pipeline and remember it
    pub fn get_or_compute(
        &self,
        mentors: &[Mentor],
        state: &QueryState,
        page_size: usize,
    ) -> Arc<QueryResult> {
        let key = QueryCacheKey {
            state: state.clone(),
            page_size,
        };

        self.results.get_with(key, || {
            tracing::trace!("Query cache miss: {:?}", state);
            Arc::new(query(mentors, state, page_size))
        })
    }

    /// Drop every entry, e.g. after swapping the catalog
    pub fn invalidate_all(&self) {
        self.results.invalidate_all();
        tracing::debug!("Query cache cleared");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.results.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MentorCatalog;

    #[test]
    fn test_get_or_compute_matches_engine() {
        let catalog = MentorCatalog::sample().unwrap();
        let cache = QueryCache::new(100, 60);
        let state = QueryState::default().with_search("product");

        let cached = cache.get_or_compute(catalog.mentors(), &state, 3);
        let direct = query(catalog.mentors(), &state, 3);
        assert_eq!(*cached, direct);

        let key = QueryCacheKey { state, page_size: 3 };
        assert!(cache.get(&key).is_some());
    }

    #[test]
    fn test_page_size_is_part_of_key() {
        let catalog = MentorCatalog::sample().unwrap();
        let cache = QueryCache::new(100, 60);
        let state = QueryState::default();

        let three = cache.get_or_compute(catalog.mentors(), &state, 3);
        let four = cache.get_or_compute(catalog.mentors(), &state, 4);
        assert_eq!(three.visible.len(), 3);
        assert_eq!(four.visible.len(), 4);
    }

    #[test]
    fn test_invalidate_all() {
        let catalog = MentorCatalog::sample().unwrap();
        let cache = QueryCache::new(100, 60);
        let key = QueryCacheKey {
            state: QueryState::default(),
            page_size: 3,
        };
        cache.get_or_compute(catalog.mentors(), &key.state, key.page_size);
        assert!(cache.get(&key).is_some());

        cache.invalidate_all();
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn test_stats() {
        let catalog = MentorCatalog::sample().unwrap();
        let cache = QueryCache::new(100, 60);
        cache.get_or_compute(catalog.mentors(), &QueryState::default(), 3);
        cache.get_or_compute(catalog.mentors(), &QueryState::default().with_page(1), 3);
        cache.results.run_pending_tasks();

        let stats = cache.stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.ttl_secs, 60);
    }
}
