//! Application state.
//!
//! Shared, read-only state for all request handlers.

use std::path::PathBuf;

use crate::api::ApiRouter;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// API stub route table.
    pub(crate) api: ApiRouter,
    /// Directory static files are served from.
    pub(crate) static_root: PathBuf,
}
