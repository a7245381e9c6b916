pub mod region_index;
pub mod region_service;
pub mod search;

pub use region_index::{LevelIndex, LevelStats, RegionIndex};
pub use region_service::RegionService;
