use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{SERVICE_NAME, SERVICE_VERSION};

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy(at: DateTime<Utc>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
