use std::env;
use std::path::PathBuf;

use crate::shared::constants::{
    DEFAULT_CACHE_MAX_AGE_SECS, DEFAULT_SEARCH_RESULT_LIMIT, MAX_SEARCH_RESULT_LIMIT,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub dataset: DatasetConfig,
    pub search: SearchConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub cache_max_age_secs: u64,
}

/// Where the region tables come from and whether to build them before serving
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Directory holding `province.json` .. `village.json`
    pub dir: PathBuf,
    pub warm_up: bool,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub result_limit: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Reads the process environment; `.env` is loaded once in `main` beforehand.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            dataset: DatasetConfig::from_env()?,
            search: SearchConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8000;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let cache_max_age_secs = env::var("CACHE_CONTROL_MAX_AGE")
            .unwrap_or_else(|_| DEFAULT_CACHE_MAX_AGE_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "CACHE_CONTROL_MAX_AGE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            cache_max_age_secs,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            cors_allowed_origins: vec!["*".to_string()],
            cache_max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS,
        }
    }
}

impl DatasetConfig {
    pub fn from_env() -> Result<Self, String> {
        let dir = parse_dataset_dir(env::var("DATASET_DIR").ok())?;

        let warm_up = parse_bool(&env::var("DATASET_WARMUP").unwrap_or_default())
            .ok_or_else(|| "DATASET_WARMUP must be true or false".to_string())?;

        Ok(Self { dir, warm_up })
    }
}

impl SearchConfig {
    pub fn from_env() -> Result<Self, String> {
        let raw = env::var("SEARCH_RESULT_LIMIT")
            .unwrap_or_else(|_| DEFAULT_SEARCH_RESULT_LIMIT.to_string());
        Ok(Self {
            result_limit: parse_search_limit(&raw)?,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Regions of Indonesia API".to_string());
        let version = env::var("SWAGGER_VERSION")
            .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Provinces, districts, subdistricts and villages of Indonesia".to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The service has no built-in dataset, so a blank value is as fatal as a missing one
fn parse_dataset_dir(raw: Option<String>) -> Result<PathBuf, String> {
    raw.filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| "DATASET_DIR must be set".to_string())
}

/// Empty means unset, which is `false`
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Some(false),
        "1" | "true" | "yes" | "on" => Some(true),
        _ => None,
    }
}

fn parse_search_limit(raw: &str) -> Result<usize, String> {
    let limit = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| "SEARCH_RESULT_LIMIT must be a valid number".to_string())?;
    if !(1..=MAX_SEARCH_RESULT_LIMIT).contains(&limit) {
        return Err(format!(
            "SEARCH_RESULT_LIMIT must be between 1 and {}",
            MAX_SEARCH_RESULT_LIMIT
        ));
    }
    Ok(limit)
}
