use std::path::PathBuf;

use crate::features::regions::models::RegionLevel;

/// Validation failures for caller-supplied codes and search terms
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    #[error("Invalid region code: {0:?}")]
    InvalidCode(String),

    #[error("Invalid region name: {0:?}")]
    InvalidName(String),
}

/// Failures while reading or validating the source tables.
/// These abort startup; they never reach a request.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {level} table: {source}")]
    Parse {
        level: RegionLevel,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid code {code:?} in {level} table")]
    InvalidCode { level: RegionLevel, code: String },

    #[error("Code {code:?} in {level} table has depth {depth}, expected {expected}")]
    LevelMismatch {
        level: RegionLevel,
        code: String,
        depth: usize,
        expected: usize,
    },

    #[error("Duplicate code {code:?} in {level} table")]
    DuplicateCode { level: RegionLevel, code: String },
}
