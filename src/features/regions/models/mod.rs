mod level;
mod region;

pub use level::RegionLevel;
pub use region::Region;
