//! CORS middleware.
//!
//! Adds permissive cross-origin headers to all responses:
//! - Access-Control-Allow-Origin
//! - Access-Control-Allow-Methods
//! - Access-Control-Allow-Headers
//!
//! `OPTIONS` requests are answered directly with an empty 200.

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::set_header::SetResponseHeaderLayer;

pub(crate) const ALLOW_ORIGIN: &str = "*";
pub(crate) const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub(crate) const ALLOW_HEADERS: &str = "Content-Type";

/// Create layer that adds Access-Control-Allow-Origin header.
pub(crate) fn allow_origin_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    )
}

/// Create layer that adds Access-Control-Allow-Methods header.
pub(crate) fn allow_methods_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    )
}

/// Create layer that adds Access-Control-Allow-Headers header.
pub(crate) fn allow_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    )
}

/// Answer preflight requests before routing.
pub(crate) async fn preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}
