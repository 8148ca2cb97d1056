//! Error types for the development server.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server startup error.
///
/// Every variant is fatal: the CLI reports it and exits with code 1.
/// Per-request failures never surface here, they become 404 responses.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Every probed port was busy.
    #[error("Could not find a free port ({attempts} attempts starting at {start})")]
    NoFreePort {
        /// First port probed.
        start: u16,
        /// Number of ports probed.
        attempts: u16,
    },

    /// The explicitly configured port is taken.
    #[error("Port {port} is already in use")]
    PortInUse {
        /// Requested port.
        port: u16,
    },

    /// Binding the listener failed for a reason other than the port being taken.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address the server tried to bind.
        addr: SocketAddr,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Host and port do not form a usable socket address.
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    /// Static root directory does not exist.
    #[error("Static root directory not found: {}", .0.display())]
    MissingStaticRoot(PathBuf),

    /// Entry document is missing from the static root.
    #[error("Entry document not found: {}", .0.display())]
    MissingEntryDocument(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
