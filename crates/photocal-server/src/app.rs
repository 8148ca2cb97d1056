//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::any;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API stubs accept every method, dispatch decides per route
    let api_routes = Router::new()
        .route("/api/", any(handlers::handle_api))
        .route("/api/{*path}", any(handlers::handle_api));

    Router::new()
        .merge(api_routes)
        .fallback(static_files::serve_static)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors::allow_origin_layer())
                .layer(cors::allow_methods_layer())
                .layer(cors::allow_headers_layer())
                .layer(from_fn(cors::preflight)),
        )
        .with_state(state)
}
