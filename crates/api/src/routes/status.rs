//! API status endpoint.

use axum::Json;
use serde::Serialize;

/// Literal status reported by `GET /api`.
pub const STATUS_OK: &str = "OK";

/// Greeting reported by `GET /api`.
pub const WELCOME_MESSAGE: &str = "Welcome to Realtime App API 🚀";

/// Format of the `timestamp` field: local date-time without offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// GET /api — returns the fixed status payload stamped with the current local time.
pub async fn get() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_OK.to_string(),
        message: WELCOME_MESSAGE.to_string(),
        timestamp: local_timestamp(),
    })
}

fn local_timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
