//! Indonesian administrative regions (wilayah) feature.
//!
//! Serves a read-only, in-memory copy of the region hierarchy: provinces,
//! districts (kabupaten/kota), subdistricts (kecamatan) and villages
//! (kelurahan/desa). Tables are parsed and validated at startup; each
//! level's region list, code index and query caches are built on first use.
//!
//! ## Region Codes
//!
//! Dot-separated numeric segments, one per level:
//! `11` → `11.01` → `11.01.01` → `11.01.01.2001`.
//! A region's parent code is its own code without the last segment.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/provinces` | List all provinces |
//! | GET | `/provinces/{code}` | Get province by code |
//! | GET | `/provinces/{code}/districts` | List districts in a province |
//! | GET | `/districts/{code}` | Get district by code |
//! | GET | `/districts/{code}/subdistricts` | List subdistricts in a district |
//! | GET | `/subdistricts/{code}` | Get subdistrict by code |
//! | GET | `/subdistricts/{code}/villages` | List villages in a subdistrict |
//! | GET | `/villages/{code}` | Get village by code |
//! | GET | `/region/{code}` | Get a region of any level |
//! | GET | `/search?name=` | Search every level |
//! | GET | `/search/{level}?name=` | Search one level |

pub mod codec;
pub mod dataset;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::RegionService;
