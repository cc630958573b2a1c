//! Route handlers that describe the service itself.

use axum::Json;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Envelope, endpoints};

/// The name reported by the health check.
pub const SERVICE_NAME: &str = "pet-project-api";
/// The version reported by the welcome and health routes.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The data in the welcome envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// The service version.
    pub version: String,
    /// The routes a client can start from.
    pub endpoints: Vec<String>,
}

/// The liveness payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always "healthy" while the process can serve requests.
    pub status: String,
    /// The service name.
    pub service: String,
    /// The service version.
    pub version: String,
    /// When the health check was answered.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// The root route describes the service and its endpoints.
pub async fn get_welcome() -> Envelope<ServiceInfo> {
    Envelope::with_data(
        "Welcome to Pet Project API",
        ServiceInfo {
            version: SERVICE_VERSION.to_owned(),
            endpoints: endpoints::PUBLIC_ENDPOINTS
                .iter()
                .map(|endpoint| endpoint.to_string())
                .collect(),
        },
    )
}

/// The liveness check. It does not touch the transaction store.
///
/// The timestamp is reported in whole seconds.
pub async fn get_health() -> Json<HealthStatus> {
    let now = OffsetDateTime::now_utc();

    Json(HealthStatus {
        status: "healthy".to_owned(),
        service: SERVICE_NAME.to_owned(),
        version: SERVICE_VERSION.to_owned(),
        timestamp: now.replace_nanosecond(0).unwrap_or(now),
    })
}
