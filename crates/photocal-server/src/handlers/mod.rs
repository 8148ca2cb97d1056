//! HTTP request handlers.

pub(crate) mod auth;
pub(crate) mod images;
pub(crate) mod status;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Handle any request under `/api/`.
///
/// The query string and request body are ignored.
pub(crate) async fn handle_api(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    let reply = state.api.dispatch(&method, uri.path());
    tracing::debug!(%method, path = uri.path(), status = %reply.status, "API request");
    reply.into_response()
}
