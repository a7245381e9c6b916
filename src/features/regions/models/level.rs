use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four tiers of the hierarchy, ordered from the top down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    Province,
    District,
    Subdistrict,
    Village,
}

impl RegionLevel {
    pub const ALL: [RegionLevel; 4] = [
        RegionLevel::Province,
        RegionLevel::District,
        RegionLevel::Subdistrict,
        RegionLevel::Village,
    ];

    /// Level for a code with `depth` segments
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(Self::Province),
            2 => Some(Self::District),
            3 => Some(Self::Subdistrict),
            4 => Some(Self::Village),
            _ => None,
        }
    }

    /// Number of code segments for regions of this level
    pub fn depth(self) -> usize {
        match self {
            Self::Province => 1,
            Self::District => 2,
            Self::Subdistrict => 3,
            Self::Village => 4,
        }
    }

    pub fn parent(self) -> Option<Self> {
        Self::from_depth(self.depth() - 1)
    }

    pub fn child(self) -> Option<Self> {
        Self::from_depth(self.depth() + 1)
    }

    /// Plural name, as used in resource paths and dataset file names
    pub fn plural(self) -> &'static str {
        match self {
            Self::Province => "provinces",
            Self::District => "districts",
            Self::Subdistrict => "subdistricts",
            Self::Village => "villages",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Province => "province",
            Self::District => "district",
            Self::Subdistrict => "subdistrict",
            Self::Village => "village",
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
