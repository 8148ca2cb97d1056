//! Google OAuth API endpoint.

use crate::api::{ApiContext, ApiReply, ApiResponse, ApiStatus};

/// Google OAuth authorization endpoint.
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/oauth2/auth";

/// Handle /api/auth/google.
pub(crate) fn google_auth(_ctx: &ApiContext<'_>) -> ApiReply {
    ApiReply::ok(ApiResponse {
        auth_url: Some(GOOGLE_AUTH_URL.to_owned()),
        ..ApiResponse::new(ApiStatus::Success, "Google OAuth would be implemented here")
    })
}
