use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::features::regions::codec;
use crate::features::regions::dataset::Dataset;
use crate::features::regions::models::{Region, RegionLevel};
use crate::features::regions::services::search;
use crate::features::regions::store::RegionStore;

/// Memo table keyed by the raw request string
type Memo = DashMap<String, Arc<[Region]>>;

/// Return the memoized value for `key`, computing it on a miss.
///
/// The computation runs without holding any lock, so two callers missing
/// the same key may both compute; only the first insert is kept and every
/// caller gets that stored value back.
fn fill_on_miss<F>(memo: &Memo, key: &str, compute: F) -> Arc<[Region]>
where
    F: FnOnce() -> Arc<[Region]>,
{
    if let Some(hit) = memo.get(key) {
        return Arc::clone(hit.value());
    }

    let value = compute();
    let stored = memo.entry(key.to_string()).or_insert(value);
    Arc::clone(stored.value())
}

/// Lookup, filter and search structures for one level
pub struct LevelIndex {
    store: RegionStore,
    by_code: OnceCell<HashMap<String, usize>>,
    by_parent: Memo,
    by_query: Memo,
}

impl LevelIndex {
    pub fn new(store: RegionStore) -> Self {
        Self {
            store,
            by_code: OnceCell::new(),
            by_parent: DashMap::new(),
            by_query: DashMap::new(),
        }
    }

    pub fn level(&self) -> RegionLevel {
        self.store.level()
    }

    pub fn regions(&self) -> &Arc<[Region]> {
        self.store.regions()
    }

    fn code_positions(&self) -> &HashMap<String, usize> {
        self.by_code.get_or_init(|| {
            self.regions()
                .iter()
                .enumerate()
                .map(|(position, region)| (region.code.clone(), position))
                .collect()
        })
    }

    /// Exact-code lookup. A code from another level is simply absent.
    pub fn find(&self, code: &str) -> Option<Region> {
        self.code_positions()
            .get(code)
            .map(|&position| self.regions()[position].clone())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.code_positions().contains_key(code)
    }

    /// Every region whose derived parent code is `parent_code`, in store order
    pub fn filter_by_parent(&self, parent_code: &str) -> Arc<[Region]> {
        fill_on_miss(&self.by_parent, parent_code, || {
            tracing::debug!("Filtering {} by parent {}", self.level().plural(), parent_code);
            self.regions()
                .iter()
                .filter(|region| codec::parent_of(&region.code).as_deref() == Some(parent_code))
                .cloned()
                .collect()
        })
    }

    /// Ranked name search, memoized by the raw query
    pub fn search(&self, query: &str, limit: usize) -> Arc<[Region]> {
        fill_on_miss(&self.by_query, query, || {
            tracing::debug!("Searching {} for {:?}", self.level().plural(), query);
            search::rank(query, self.regions(), limit)
        })
    }

    pub fn stats(&self) -> LevelStats {
        LevelStats {
            level: self.level(),
            regions: self.store.region_count(),
            built: self.store.is_built(),
            cached_filters: self.by_parent.len(),
            cached_searches: self.by_query.len(),
        }
    }
}

/// Snapshot of one level's size and cache occupancy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    pub level: RegionLevel,
    pub regions: usize,
    pub built: bool,
    pub cached_filters: usize,
    pub cached_searches: usize,
}

/// The four level indexes of one dataset. Built once per process and shared.
pub struct RegionIndex {
    levels: [LevelIndex; 4],
    search_limit: usize,
}

impl RegionIndex {
    pub fn new(dataset: Dataset, search_limit: usize) -> Self {
        let levels = dataset
            .into_tables()
            .map(|(level, table)| LevelIndex::new(RegionStore::new(level, table)));
        Self {
            levels,
            search_limit,
        }
    }

    pub fn level(&self, level: RegionLevel) -> &LevelIndex {
        &self.levels[level.depth() - 1]
    }

    pub fn find(&self, level: RegionLevel, code: &str) -> Option<Region> {
        self.level(level).find(code)
    }

    pub fn filter_by_parent(&self, parent_code: &str, child: RegionLevel) -> Arc<[Region]> {
        self.level(child).filter_by_parent(parent_code)
    }

    pub fn search(&self, query: &str, level: RegionLevel) -> Arc<[Region]> {
        self.level(level).search(query, self.search_limit)
    }

    /// Build every store and code index up front, and count regions whose
    /// parent is missing from the level above.
    pub fn warm_up(&self) -> usize {
        let mut orphans = 0;
        for index in &self.levels {
            index.code_positions();
            let Some(parent_level) = index.level().parent() else {
                continue;
            };

            let parents = self.level(parent_level);
            let missing = index
                .regions()
                .iter()
                .filter(|region| {
                    codec::parent_of(&region.code).is_some_and(|parent| !parents.contains(&parent))
                })
                .count();

            if missing > 0 {
                tracing::warn!(
                    "{} {} have no parent in {}",
                    missing,
                    index.level().plural(),
                    parent_level.plural()
                );
            }
            orphans += missing;
        }
        orphans
    }

    pub fn stats(&self) -> Vec<LevelStats> {
        self.levels.iter().map(LevelIndex::stats).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;

    use crate::shared::test_helpers::fixture_dataset;

    fn index() -> RegionIndex {
        RegionIndex::new(fixture_dataset(), 25)
    }

    #[test]
    fn test_find_exact_code() {
        let index = index();
        assert_eq!(
            index.find(RegionLevel::Province, "11"),
            Some(Region::new("11", "Aceh"))
        );
        assert_eq!(
            index.find(RegionLevel::Village, "11.01.01.2001"),
            Some(Region::new("11.01.01.2001", "Keude Bakongan"))
        );
        assert_eq!(index.find(RegionLevel::Province, "99"), None);
    }

    #[test]
    fn test_find_wrong_level_is_absent() {
        let index = index();
        assert_eq!(index.find(RegionLevel::District, "11"), None);
        assert_eq!(index.find(RegionLevel::Province, "11.01"), None);
    }

    #[test]
    fn test_filter_by_parent_keeps_store_order() {
        let index = index();
        let districts = index.filter_by_parent("11", RegionLevel::District);
        let codes: Vec<&str> = districts.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["11.01", "11.71", "11.02"]);
    }

    #[test]
    fn test_filter_by_parent_empty_is_valid() {
        let index = index();
        assert!(index.filter_by_parent("01", RegionLevel::District).is_empty());
        assert!(index.filter_by_parent("51", RegionLevel::District).is_empty());
        // provinces have no parent
        assert!(index.filter_by_parent("11", RegionLevel::Province).is_empty());
    }

    #[test]
    fn test_filter_is_memoized() {
        let index = index();
        let first = index.filter_by_parent("11.01", RegionLevel::Subdistrict);
        let second = index.filter_by_parent("11.01", RegionLevel::Subdistrict);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(index.level(RegionLevel::Subdistrict).stats().cached_filters, 1);
    }

    #[test]
    fn test_search_is_memoized_per_level() {
        let index = index();
        let first = index.search("aceh", RegionLevel::District);
        let second = index.search("aceh", RegionLevel::District);
        assert!(Arc::ptr_eq(&first, &second));

        let provinces = index.search("aceh", RegionLevel::Province);
        assert_eq!(provinces.as_ref(), &[Region::new("11", "Aceh")]);
        assert_eq!(index.level(RegionLevel::Province).stats().cached_searches, 1);
        assert_eq!(index.level(RegionLevel::District).stats().cached_searches, 1);
    }

    #[test]
    fn test_search_respects_limit() {
        let index = RegionIndex::new(fixture_dataset(), 1);
        let districts = index.search("a", RegionLevel::District);
        assert_eq!(districts.len(), 1);
    }

    /// Run `f` on eight threads released together, collecting every result
    fn race<F>(f: F) -> Vec<Arc<[Region]>>
    where
        F: Fn() -> Arc<[Region]> + Sync,
    {
        let barrier = Barrier::new(8);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        f()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
    }

    #[test]
    fn test_concurrent_filter_misses_share_stored_value() {
        let index = index();
        let results = race(|| index.filter_by_parent("31.73", RegionLevel::Subdistrict));

        let stored = index.filter_by_parent("31.73", RegionLevel::Subdistrict);
        for result in &results {
            assert!(Arc::ptr_eq(result, &stored));
        }
        assert_eq!(stored.len(), 2);
        assert_eq!(index.level(RegionLevel::Subdistrict).stats().cached_filters, 1);
    }

    #[test]
    fn test_concurrent_search_misses_share_stored_value() {
        let index = index();
        let results = race(|| index.search("aceh", RegionLevel::District));

        let stored = index.search("aceh", RegionLevel::District);
        for result in &results {
            assert!(Arc::ptr_eq(result, &stored));
        }
        let codes: Vec<&str> = stored.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["11.01", "11.02", "11.71"]);
        assert_eq!(index.level(RegionLevel::District).stats().cached_searches, 1);
    }

    #[test]
    fn test_warm_up_counts_orphans() {
        let index = index();
        // "12.71" has no province "12" in the fixture
        assert_eq!(index.warm_up(), 1);
        assert!(index.stats().iter().all(|s| s.built));
    }
}
