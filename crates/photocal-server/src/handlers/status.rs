//! Status API endpoint.
//!
//! Reports that the server is up.

use chrono::Utc;

use crate::api::{ApiContext, ApiReply, ApiResponse, ApiStatus};

/// Handle /api/status.
pub(crate) fn get_status(ctx: &ApiContext<'_>) -> ApiReply {
    ApiReply::ok(ApiResponse {
        timestamp: Some(unix_timestamp()),
        version: Some(ctx.version.to_owned()),
        ..ApiResponse::new(
            ApiStatus::Running,
            "Calendar Photo Converter server is running",
        )
    })
}

/// Current time as fractional seconds since the Unix epoch.
#[allow(clippy::cast_precision_loss)]
fn unix_timestamp() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
