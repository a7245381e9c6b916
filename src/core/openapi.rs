use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{AppInfo, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Meta
        regions_handlers::app_info,
        regions_handlers::health_check,
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::get_province,
        regions_handlers::list_districts_by_province,
        regions_handlers::get_district,
        regions_handlers::list_subdistricts_by_district,
        regions_handlers::get_subdistrict,
        regions_handlers::list_villages_by_subdistrict,
        regions_handlers::get_village,
        regions_handlers::get_region,
        // Search
        regions_handlers::search_all,
        regions_handlers::search_provinces,
        regions_handlers::search_districts,
        regions_handlers::search_subdistricts,
        regions_handlers::search_villages,
    ),
    components(
        schemas(
            AppInfo,
            MessageResponse,
            regions_dtos::RegionResponseDto,
        )
    ),
    tags(
        (name = "meta", description = "Service name and liveness"),
        (name = "regions", description = "Indonesian administrative regions (provinces, districts, subdistricts, villages)"),
        (name = "search", description = "Case-insensitive region name search"),
    ),
    info(
        title = "Regions of Indonesia API",
        version = "0.1.0",
        description = "Provinces, districts, subdistricts and villages of Indonesia",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
