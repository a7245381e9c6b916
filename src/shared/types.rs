use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::APP_NAME;

/// Error envelope returned for every non-2xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of the service root endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppInfo {
    pub name: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: APP_NAME.to_string(),
        }
    }
}
