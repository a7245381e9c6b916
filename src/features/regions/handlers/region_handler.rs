use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::regions::dtos::{RegionResponseDto, RegionSearchQuery};
use crate::features::regions::models::{Region, RegionLevel};
use crate::features::regions::services::RegionService;
use crate::shared::constants::{MSG_REGIONS_NOT_FOUND, MSG_REGION_NOT_FOUND};
use crate::shared::types::{AppInfo, MessageResponse};

type RegionList = Json<Vec<RegionResponseDto>>;

fn one(region: Option<Region>) -> Result<Json<RegionResponseDto>> {
    region
        .map(|r| Json(r.into()))
        .ok_or_else(|| AppError::not_found(MSG_REGION_NOT_FOUND))
}

fn many(regions: &[Region]) -> Result<RegionList> {
    if regions.is_empty() {
        return Err(AppError::not_found(MSG_REGIONS_NOT_FOUND));
    }
    Ok(Json(regions.iter().map(Into::into).collect()))
}

fn search(
    service: &RegionService,
    query: RegionSearchQuery,
    level: Option<RegionLevel>,
) -> Result<RegionList> {
    let name = query.name.unwrap_or_default();
    let regions = service.search_by_name(&name, level)?;
    many(&regions)
}

// ==================== Service Info ====================

/// Service name
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service name", body = AppInfo)),
    tag = "meta"
)]
pub async fn app_info() -> Json<AppInfo> {
    Json(AppInfo::default())
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "meta"
)]
pub async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

// ==================== Province Handlers ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/provinces",
    responses(
        (status = 200, description = "List of provinces", body = Vec<RegionResponseDto>),
        (status = 404, description = "Regions not found", body = MessageResponse)
    ),
    tag = "regions"
)]
pub async fn list_provinces(State(service): State<Arc<RegionService>>) -> Result<RegionList> {
    many(&service.list(RegionLevel::Province))
}

/// Get a province by code
#[utoipa::path(
    get,
    path = "/provinces/{code}",
    params(("code" = String, Path, description = "Province code (2 digits)")),
    responses(
        (status = 200, description = "Province details", body = RegionResponseDto),
        (status = 400, description = "Invalid code param", body = MessageResponse),
        (status = 404, description = "Region not found", body = MessageResponse)
    ),
    tag = "regions"
)]
pub async fn get_province(
    State(service): State<Arc<RegionService>>,
    AppPath(code): AppPath<String>,
) -> Result<Json<RegionResponseDto>> {
    one(service.find(RegionLevel::Province, &code)?)
}

/// List districts in a province
#[utoipa::path(
    get,
    path = "/provinces/{code}/districts",
    params(("code" = String, Path, description = "Province code (2 digits)")),
    responses(
        (status = 200, description = "Districts of the province", body = Vec<RegionResponseDto>),
        (status = 400, description = "Invalid code param", body = MessageResponse),
        (status = 404, description = "Regions not found", body = MessageResponse)
    ),
    tag = "regions"
)]
pub async fn list_districts_by_province(
    State(service): State<Arc<RegionService>>,
    AppPath(code): AppPath<String>,
) -> Result<RegionList> {
    many(&service.filter_children(&code, RegionLevel::District)?)
}

// ==================== District Handlers ====================

/// Get a district by code
#[utoipa::path(
    get,
    path = "/districts/{code}",
    params(("code" = String, Path, description = "District code (format: XX.XX)")),
    responses(
        (status = 200, description = "District details", body = RegionResponseDto),
        (status = 400, description = "Invalid code param", body = MessageResponse),
        (status = 404, description = "Region not found", body = MessageResponse)
    ),
    tag = "regions"
)]
pub async fn get_district(
    State(service): State<Arc<RegionService>>,
    AppPath(code): AppPath<String>,
) -> Result<Json<RegionResponseDto>> {
    one(service.find(RegionLevel::District, &code)?)
}

/// List subdistricts in a district
#[utoipa::path(
    get,
    path = "/districts/{code}/subdistricts",
    params(("code" = String, Path, description = "District code (format: XX.XX)")),
    responses(
        (status = 200, description = "Subdistricts of the district", body = Vec<RegionResponseDto>),
        (status = 400, description = "Invalid code param", body = MessageResponse),
        (status = 404, description = "Regions not found", body = MessageResponse)
    ),
    tag = "regions"
)]
pub async fn list_subdistricts_by_district(
    State(service): State<Arc<RegionService>>,
    AppPath(code): AppPath<String>,
) -> Result<RegionList> {
    many(&service.filter_children(&code, RegionLevel::Subdistrict)?)
}

// ==================== Subdistrict Handlers ====================

/// Get a subdistrict by code
#[utoipa::path(
    get,
    path = "/subdistricts/{code}",
    params(("code" = String, Path, description = "Subdistrict code (format: XX.XX.XX)")),
    responses(
        (status = 200, description = "Subdistrict details", body = RegionResponseDto),
        (status = 400, description = "Invalid code param", body = MessageResponse),
        (status = 404, description = "Region not found", body = MessageResponse)
    ),
    tag = "regions"
)]
pub async fn get_subdistrict(
    State(service): State<Arc<RegionService>>,
    AppPath(code): AppPath<String>,
) -> Result<Json<RegionResponseDto>> {
    one(service.find(RegionLevel::Subdistrict, &code)?)
}

/// List villages in a subdistrict
#[utoipa::path(
    get,
    path = "/subdistricts/{code}/villages",
    params(("code" = String, Path, description = "Subdistrict code (format: XX.XX.XX)")),
    responses(
        (status = 200, description = "Villages of the subdistrict", body = Vec<RegionResponseDto>),
        (status = 400, description = "Invalid code param", body = MessageResponse),
        (status = 404, description = "Regions not found", body = MessageResponse)
    ),
    tag = "regions"
)]
pub async fn list_villages_by_subdistrict(
    State(service): State<Arc<RegionService>>,
    AppPath(code): AppPath<String>,
) -> Result<RegionList> {
    many(&service.filter_children(&code, RegionLevel::Village)?)
}

// ==================== Village Handlers ====================

/// Get a village by code
#[utoipa::path(
    get,
    path = "/villages/{code}",
    params(("code" = String, Path, description = "Village code (format: XX.XX.XX.XXXX)")),
    responses(
        (status = 200, description = "Village details", body = RegionResponseDto),
        (status = 400, description = "Invalid code param", body = MessageResponse),
        (status = 404, description = "Region not found", body = MessageResponse)
    ),
    tag = "regions"
)]
pub async fn get_village(
    State(service): State<Arc<RegionService>>,
    AppPath(code): AppPath<String>,
) -> Result<Json<RegionResponseDto>> {
    one(service.find(RegionLevel::Village, &code)?)
}

// ==================== Any Level ====================

/// Get a region of any level, resolved from the code's depth
#[utoipa::path(
    get,
    path = "/region/{code}",
    params(("code" = String, Path, description = "Region code with 1 to 4 segments")),
    responses(
        (status = 200, description = "Region details", body = RegionResponseDto),
        (status = 400, description = "Invalid code param", body = MessageResponse),
        (status = 404, description = "Region not found", body = MessageResponse)
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    AppPath(code): AppPath<String>,
) -> Result<Json<RegionResponseDto>> {
    one(service.find_by_code(&code)?)
}

// ==================== Search Handlers ====================

/// Search every level, provinces first
#[utoipa::path(
    get,
    path = "/search",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "Matches from every level", body = Vec<RegionResponseDto>),
        (status = 400, description = "Invalid name query", body = MessageResponse),
        (status = 404, description = "Regions not found", body = MessageResponse)
    ),
    tag = "search"
)]
pub async fn search_all(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<RegionList> {
    search(&service, query, None)
}

/// Search provinces by name
#[utoipa::path(
    get,
    path = "/search/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "Matching provinces", body = Vec<RegionResponseDto>),
        (status = 400, description = "Invalid name query", body = MessageResponse),
        (status = 404, description = "Regions not found", body = MessageResponse)
    ),
    tag = "search"
)]
pub async fn search_provinces(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<RegionList> {
    search(&service, query, Some(RegionLevel::Province))
}

/// Search districts by name
#[utoipa::path(
    get,
    path = "/search/districts",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "Matching districts", body = Vec<RegionResponseDto>),
        (status = 400, description = "Invalid name query", body = MessageResponse),
        (status = 404, description = "Regions not found", body = MessageResponse)
    ),
    tag = "search"
)]
pub async fn search_districts(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<RegionList> {
    search(&service, query, Some(RegionLevel::District))
}

/// Search subdistricts by name
#[utoipa::path(
    get,
    path = "/search/subdistricts",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "Matching subdistricts", body = Vec<RegionResponseDto>),
        (status = 400, description = "Invalid name query", body = MessageResponse),
        (status = 404, description = "Regions not found", body = MessageResponse)
    ),
    tag = "search"
)]
pub async fn search_subdistricts(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<RegionList> {
    search(&service, query, Some(RegionLevel::Subdistrict))
}

/// Search villages by name
#[utoipa::path(
    get,
    path = "/search/villages",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "Matching villages", body = Vec<RegionResponseDto>),
        (status = 400, description = "Invalid name query", body = MessageResponse),
        (status = 404, description = "Regions not found", body = MessageResponse)
    ),
    tag = "search"
)]
pub async fn search_villages(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<RegionList> {
    search(&service, query, Some(RegionLevel::Village))
}
