use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::features::regions::dataset::RegionTable;
use crate::features::regions::models::{Region, RegionLevel};

/// Read-only region sequence for one level.
///
/// The raw table is kept until first use; the `Region` sequence is built
/// from it exactly once, and every caller (including ones racing on the
/// first access) observes that same completed sequence.
pub struct RegionStore {
    level: RegionLevel,
    table: RegionTable,
    regions: OnceCell<Arc<[Region]>>,
}

impl RegionStore {
    pub fn new(level: RegionLevel, table: RegionTable) -> Self {
        Self {
            level,
            table,
            regions: OnceCell::new(),
        }
    }

    pub fn level(&self) -> RegionLevel {
        self.level
    }

    /// All regions of this level in source table order
    pub fn regions(&self) -> &Arc<[Region]> {
        self.regions.get_or_init(|| {
            let regions: Arc<[Region]> = self
                .table
                .iter()
                .map(|(code, name)| Region::new(code, name))
                .collect();
            tracing::debug!("Built {} store with {} regions", self.level, regions.len());
            regions
        })
    }

    pub fn is_built(&self) -> bool {
        self.regions.get().is_some()
    }

    /// Number of source rows; does not force the build
    pub fn region_count(&self) -> usize {
        self.table.len()
    }
}
