//! API stub router.
//!
//! Requests under [`API_PREFIX`] are matched against a route table built once
//! at startup. [`ApiRouter::dispatch`] is total: unmatched requests get a
//! 404 error payload instead of falling through to the static responder.

use axum::Json;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::handlers;

/// Path prefix reserved for API routes.
pub const API_PREFIX: &str = "/api/";

/// Application-level status reported in every API payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
    Running,
}

/// JSON payload returned by every API endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: ApiStatus,
    pub message: String,
    /// Seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
}

impl ApiResponse {
    /// Create a payload with only `status` and `message` set.
    pub fn new(status: ApiStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            timestamp: None,
            version: None,
            events: None,
            auth_url: None,
        }
    }
}

/// Calendar event extracted from a photo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
}

/// HTTP status paired with the JSON payload.
///
/// Handlers pick the transport status explicitly instead of deriving it
/// from [`ApiResponse::status`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: ApiResponse,
}

impl ApiReply {
    /// 200 reply.
    pub fn ok(body: ApiResponse) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    /// 404 reply with an error payload.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ApiResponse::new(ApiStatus::Error, "API endpoint not found"),
        }
    }
}

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Values handlers may read while building a reply.
pub(crate) struct ApiContext<'a> {
    /// Server version string.
    pub(crate) version: &'a str,
}

type Handler = fn(&ApiContext<'_>) -> ApiReply;

/// Single entry of the route table.
struct Route {
    /// Required method, `None` accepts any.
    method: Option<Method>,
    /// Exact request path.
    path: &'static str,
    handler: Handler,
}

impl Route {
    fn matches(&self, method: &Method, path: &str) -> bool {
        self.path == path && self.method.as_ref().is_none_or(|m| m == method)
    }
}

/// Route table for the API stubs.
pub struct ApiRouter {
    routes: Vec<Route>,
    version: String,
}

impl ApiRouter {
    /// Build the route table.
    pub fn new(version: impl Into<String>) -> Self {
        let routes = vec![
            Route {
                method: None,
                path: "/api/status",
                handler: handlers::status::get_status,
            },
            Route {
                method: Some(Method::POST),
                path: "/api/process-images",
                handler: handlers::images::process_images,
            },
            Route {
                method: None,
                path: "/api/auth/google",
                handler: handlers::auth::google_auth,
            },
        ];

        Self {
            routes,
            version: version.into(),
        }
    }

    /// Resolve a request to its reply.
    ///
    /// Never fails: anything without a matching route yields
    /// [`ApiReply::not_found`].
    pub fn dispatch(&self, method: &Method, path: &str) -> ApiReply {
        let ctx = ApiContext {
            version: &self.version,
        };

        self.routes
            .iter()
            .find(|route| route.matches(method, path))
            .map_or_else(ApiReply::not_found, |route| (route.handler)(&ctx))
    }
}

/// Whether `path` belongs to the API surface.
pub fn is_api_path(path: &str) -> bool {
    path.starts_with(API_PREFIX)
}
