use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::Region;

/// Query parameters for name search
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RegionSearchQuery {
    /// Search by name (case-insensitive, partial match)
    #[param(example = "aceh")]
    pub name: Option<String>,
}

/// Response DTO for a single region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionResponseDto {
    #[schema(example = "11.01")]
    pub code: String,
    #[schema(example = "Kabupaten Aceh Selatan")]
    pub name: String,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            code: region.code,
            name: region.name,
        }
    }
}

impl From<&Region> for RegionResponseDto {
    fn from(region: &Region) -> Self {
        Self {
            code: region.code.clone(),
            name: region.name.clone(),
        }
    }
}
