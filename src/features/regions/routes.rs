use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/", get(handlers::app_info))
        .route("/health", get(handlers::health_check))
        // Province routes
        .route("/provinces", get(handlers::list_provinces))
        .route("/provinces/{code}", get(handlers::get_province))
        .route(
            "/provinces/{code}/districts",
            get(handlers::list_districts_by_province),
        )
        // District routes
        .route("/districts/{code}", get(handlers::get_district))
        .route(
            "/districts/{code}/subdistricts",
            get(handlers::list_subdistricts_by_district),
        )
        // Subdistrict routes
        .route("/subdistricts/{code}", get(handlers::get_subdistrict))
        .route(
            "/subdistricts/{code}/villages",
            get(handlers::list_villages_by_subdistrict),
        )
        // Village routes
        .route("/villages/{code}", get(handlers::get_village))
        // Any level
        .route("/region/{code}", get(handlers::get_region))
        // Search routes
        .route("/search", get(handlers::search_all))
        .route("/search/provinces", get(handlers::search_provinces))
        .route("/search/districts", get(handlers::search_districts))
        .route("/search/subdistricts", get(handlers::search_subdistricts))
        .route("/search/villages", get(handlers::search_villages))
        .with_state(service)
}
