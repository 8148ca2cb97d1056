//! Static file serving.
//!
//! Serves frontend files from the configured static root. `/` maps to the
//! entry document. Paths that would escape the root are treated as missing.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;

use crate::error::ServerError;
use crate::state::AppState;

/// Document served for the root path.
pub const ENTRY_DOCUMENT: &str = "index.html";

/// Files the frontend normally ships next to the entry document.
const RECOMMENDED_ASSETS: &[&str] = &["styles.css", "app.js"];

/// Serve a static file from the static root.
pub(crate) async fn serve_static(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(relative) = resolve_request_path(uri.path()) else {
        tracing::debug!(path = uri.path(), "Rejected static path");
        return StatusCode::NOT_FOUND.into_response();
    };

    let full_path = state.static_root.join(&relative);
    match tokio::fs::read(&full_path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(&relative).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], content).into_response()
        }
        Err(e) => {
            tracing::debug!(path = %full_path.display(), error = %e, "Static file not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Map a request path to a path relative to the static root.
///
/// Returns `None` for paths that are not valid UTF-8 after percent-decoding
/// or that contain `..` or absolute components.
fn resolve_request_path(path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    let trimmed = decoded.trim_start_matches('/');

    let mut relative = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    // Directory requests get their entry document
    if relative.as_os_str().is_empty() || trimmed.ends_with('/') {
        relative.push(ENTRY_DOCUMENT);
    }

    Some(relative)
}

/// Check that the static root and its entry document exist.
///
/// # Errors
///
/// Returns [`ServerError::MissingStaticRoot`] if `root` is not a directory,
/// or [`ServerError::MissingEntryDocument`] if it has no entry document.
pub fn check_static_root(root: &Path) -> Result<(), ServerError> {
    if !root.is_dir() {
        return Err(ServerError::MissingStaticRoot(root.to_path_buf()));
    }

    let entry = root.join(ENTRY_DOCUMENT);
    if !entry.is_file() {
        return Err(ServerError::MissingEntryDocument(entry));
    }

    Ok(())
}

/// List recommended frontend files absent from `root`.
pub fn missing_recommended_assets(root: &Path) -> Vec<&'static str> {
    RECOMMENDED_ASSETS
        .iter()
        .copied()
        .filter(|name| !root.join(name).is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_maps_to_entry_document() {
        assert_eq!(resolve_request_path("/"), Some(PathBuf::from("index.html")));
        assert_eq!(resolve_request_path(""), Some(PathBuf::from("index.html")));
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            resolve_request_path("/css/styles.css"),
            Some(PathBuf::from("css/styles.css"))
        );
    }

    #[test]
    fn test_directory_path_maps_to_entry_document() {
        assert_eq!(
            resolve_request_path("/docs/"),
            Some(PathBuf::from("docs/index.html"))
        );
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(
            resolve_request_path("/my%20photo.png"),
            Some(PathBuf::from("my photo.png"))
        );
    }

    #[test]
    fn test_current_dir_components_are_skipped() {
        assert_eq!(
            resolve_request_path("/./app.js"),
            Some(PathBuf::from("app.js"))
        );
    }

    #[test]
    fn test_parent_dir_rejected() {
        assert_eq!(resolve_request_path("/../secret.txt"), None);
        assert_eq!(resolve_request_path("/css/../../secret.txt"), None);
        assert_eq!(resolve_request_path("/%2e%2e/secret.txt"), None);
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert_eq!(resolve_request_path("/%ff.html"), None);
    }

    #[test]
    fn test_check_static_root_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("frontend");

        let err = check_static_root(&root).unwrap_err();

        assert!(matches!(err, ServerError::MissingStaticRoot(p) if p == root));
    }

    #[test]
    fn test_check_static_root_missing_entry_document() {
        let dir = tempfile::tempdir().unwrap();

        let err = check_static_root(dir.path()).unwrap_err();

        assert!(
            matches!(err, ServerError::MissingEntryDocument(p) if p == dir.path().join("index.html"))
        );
    }

    #[test]
    fn test_check_static_root_ok() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        assert!(check_static_root(dir.path()).is_ok());
    }

    #[test]
    fn test_missing_recommended_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("styles.css"), "body {}").unwrap();

        assert_eq!(missing_recommended_assets(dir.path()), vec!["app.js"]);

        std::fs::write(dir.path().join("app.js"), "").unwrap();
        assert!(missing_recommended_assets(dir.path()).is_empty());
    }
}
