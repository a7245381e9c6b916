use std::sync::Arc;

use crate::features::regions::codec;
use crate::features::regions::dataset::Dataset;
use crate::features::regions::error::RegionError;
use crate::features::regions::models::{Region, RegionLevel};
use crate::features::regions::services::region_index::{LevelStats, RegionIndex};

pub type Result<T> = std::result::Result<T, RegionError>;

/// Query facade over the in-memory region index.
///
/// Every entry point validates its input first; validation failures are
/// `RegionError`s, while "nothing matched" is an empty sequence or `None`.
pub struct RegionService {
    index: RegionIndex,
}

impl RegionService {
    pub fn new(index: RegionIndex) -> Self {
        Self { index }
    }

    pub fn from_dataset(dataset: Dataset, search_limit: usize) -> Self {
        Self::new(RegionIndex::new(dataset, search_limit))
    }

    pub fn index(&self) -> &RegionIndex {
        &self.index
    }

    // ==================== Lookup ====================

    /// All regions of a level, in source order
    pub fn list(&self, level: RegionLevel) -> Arc<[Region]> {
        Arc::clone(self.index.level(level).regions())
    }

    /// Lookup within one level. A code of another depth is absent, not invalid.
    pub fn find(&self, level: RegionLevel, code: &str) -> Result<Option<Region>> {
        let code = codec::validate_code(code)?;
        Ok(self.index.find(level, code))
    }

    /// Lookup at whichever level the code's depth points to
    pub fn find_by_code(&self, code: &str) -> Result<Option<Region>> {
        let code = codec::validate_code(code)?;
        let level =
            codec::level_of(code).ok_or_else(|| RegionError::InvalidCode(code.to_string()))?;
        Ok(self.index.find(level, code))
    }

    // ==================== Children ====================

    /// Regions at `child` whose parent code is `parent_code`
    pub fn filter_children(&self, parent_code: &str, child: RegionLevel) -> Result<Arc<[Region]>> {
        let parent_code = codec::validate_code(parent_code)?;
        Ok(self.index.filter_by_parent(parent_code, child))
    }

    // ==================== Search ====================

    /// Name search on one level, or on all four concatenated top-down
    pub fn search_by_name(&self, name: &str, level: Option<RegionLevel>) -> Result<Arc<[Region]>> {
        let name = codec::validate_name(name)?;
        let regions = match level {
            Some(level) => self.index.search(name, level),
            None => RegionLevel::ALL
                .iter()
                .flat_map(|&level| self.index.search(name, level).to_vec())
                .collect(),
        };
        Ok(regions)
    }

    pub fn stats(&self) -> Vec<LevelStats> {
        self.index.stats()
    }
}
