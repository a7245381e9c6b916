/// Name reported by the service root endpoint
pub const APP_NAME: &str = "regions-of-indonesia";

/// Separator between region code segments ("11.01.01.2001")
pub const REGION_CODE_SEPARATOR: char = '.';

/// Default number of hits returned by a single-level search
pub const DEFAULT_SEARCH_RESULT_LIMIT: usize = 25;

/// Maximum search limit allowed through configuration
pub const MAX_SEARCH_RESULT_LIMIT: usize = 100;

/// Default `Cache-Control` max-age for responses (one day)
pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 86_400;

// =============================================================================
// ERROR MESSAGES
// =============================================================================

pub const MSG_INVALID_CODE: &str = "Invalid code param";
pub const MSG_INVALID_NAME: &str = "Invalid name query";
pub const MSG_REGION_NOT_FOUND: &str = "Region not found";
pub const MSG_REGIONS_NOT_FOUND: &str = "Regions not found";
pub const MSG_ROUTE_NOT_FOUND: &str = "Not found";
