//! Local development server for the calendar photo converter frontend.
//!
//! This crate provides an axum HTTP server serving:
//! - Static files for the frontend from a static root directory
//! - Placeholder JSON API endpoints under `/api/`
//! - Permissive CORS headers on every response
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use photocal_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         static_root: PathBuf::from("frontend"),
//!         open_browser: false,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (photocal-server)
//!                        │
//!                        ├─► OPTIONS (any path) ──► empty 200
//!                        │
//!                        ├─► /api/* ──► ApiRouter (canned JSON stubs)
//!                        │
//!                        └─► everything else ──► files under static root
//! ```

mod api;
mod app;
mod browser;
mod error;
mod handlers;
mod middleware;
mod port;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub use api::{API_PREFIX, ApiReply, ApiResponse, ApiRouter, ApiStatus, Event, is_api_path};
pub use browser::browser_url;
pub use error::ServerError;
pub use port::{PortDiscovery, find_free_port};
pub use static_files::{ENTRY_DOCUMENT, check_static_root, missing_recommended_assets};

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Fixed port. `None` discovers a free port.
    pub port: Option<u16>,
    /// Ports probed when `port` is `None`.
    pub port_discovery: PortDiscovery,
    /// Directory static files are served from.
    pub static_root: PathBuf,
    /// Open the default browser once listening.
    pub open_browser: bool,
    /// Application version (reported by `/api/status`).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: None,
            port_discovery: PortDiscovery::default(),
            static_root: PathBuf::from("frontend"),
            open_browser: true,
            version: String::new(),
        }
    }
}

/// Build the application router for `config`.
///
/// Does not touch the network or check the static root.
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        api: ApiRouter::new(config.version.clone()),
        static_root: config.static_root.clone(),
    });
    app::create_router(state)
}

/// Development server bound to its listening socket.
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    config: ServerConfig,
}

impl Server {
    /// Check the static root and bind the listener.
    ///
    /// # Errors
    ///
    /// Returns an error if the static root or entry document is missing, no
    /// free port is found, or the port cannot be bound.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        check_static_root(&config.static_root)?;

        let listener =
            port::bind_listener(&config.host, config.port, config.port_discovery).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(address = %local_addr, "Bound listener");

        Ok(Self {
            listener,
            local_addr,
            config,
        })
    }

    /// Address the server listens on.
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// URL to open in a local browser.
    #[must_use]
    pub fn url(&self) -> String {
        browser_url(self.local_addr)
    }

    /// Serve requests until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if the accept loop fails.
    pub async fn run(self) -> Result<(), ServerError> {
        let app = router(&self.config);

        if self.config.open_browser {
            browser::spawn_launch(self.url());
        }

        tracing::info!(address = %self.local_addr, "Starting server");
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    Server::bind(config).await?.run().await
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from photocal config.
///
/// # Arguments
///
/// * `config` - photocal configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &photocal_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        port_discovery: PortDiscovery {
            start: config.server.port_range_start,
            attempts: config.server.port_attempts,
        },
        static_root: config.frontend_resolved.static_root.clone(),
        open_browser: config.server.open_browser,
        version,
    }
}
