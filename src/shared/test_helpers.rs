use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;

use crate::core::config::AppConfig;
use crate::core::openapi::ApiDoc;
use crate::features::regions::dataset::{Dataset, RegionTable};
use crate::features::regions::RegionService;

/// Small dataset covering every level, including one district ("12.71")
/// whose province is missing.
#[allow(dead_code)]
pub fn fixture_dataset() -> Dataset {
    Dataset::from_tables(
        RegionTable::from_iter([("11", "Aceh"), ("31", "DKI Jakarta"), ("51", "Bali")]),
        RegionTable::from_iter([
            ("11.01", "Kabupaten Aceh Selatan"),
            ("11.71", "Kota Banda Aceh"),
            ("11.02", "Kabupaten Aceh Tenggara"),
            ("12.71", "Kota Medan"),
            ("31.73", "Kota Administrasi Jakarta Pusat"),
        ]),
        RegionTable::from_iter([
            ("11.01.01", "Bakongan"),
            ("11.01.02", "Kluet Utara"),
            ("31.73.01", "Gambir"),
            ("31.73.06", "Menteng"),
        ]),
        RegionTable::from_iter([
            ("11.01.01.2001", "Keude Bakongan"),
            ("11.01.01.2002", "Ujong Padang"),
            ("31.73.01.1001", "Gambir"),
            ("31.73.06.1001", "Menteng"),
        ]),
    )
    .expect("fixture dataset is valid")
}

#[allow(dead_code)]
pub fn fixture_service() -> RegionService {
    RegionService::from_dataset(fixture_dataset(), 25)
}

/// Full application router over the fixture dataset
#[allow(dead_code)]
pub fn fixture_app() -> Router {
    crate::app(
        Arc::new(fixture_service()),
        &AppConfig::default(),
        ApiDoc::openapi(),
    )
}
