//! Port discovery and listener binding.

use std::io::ErrorKind;
use std::net::{SocketAddr, TcpListener as StdTcpListener, ToSocketAddrs};

use tokio::net::TcpListener;

use crate::error::ServerError;

/// Port range probed when no fixed port is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortDiscovery {
    /// First port probed.
    pub start: u16,
    /// Maximum number of consecutive ports probed.
    pub attempts: u16,
}

impl Default for PortDiscovery {
    fn default() -> Self {
        Self {
            start: 8000,
            attempts: 10,
        }
    }
}

/// Find a free port on `host`, probing `start`, `start + 1`, ...
///
/// Each candidate is bound and released immediately. Probing stops at the
/// first success, after `attempts` ports, or at port 65535, whichever comes
/// first.
///
/// The probe is not atomic: another process can take the port between the
/// probe releasing it and the server binding it. The server then fails with
/// [`ServerError::PortInUse`].
///
/// # Errors
///
/// Returns [`ServerError::NoFreePort`] if no candidate could be bound, or
/// [`ServerError::InvalidAddress`] if `host` does not resolve.
pub fn find_free_port(host: &str, start: u16, attempts: u16) -> Result<u16, ServerError> {
    for port in (start..=u16::MAX).take(usize::from(attempts)) {
        let addr = resolve(host, port)?;
        match StdTcpListener::bind(addr) {
            Ok(probe) => {
                drop(probe);
                tracing::debug!(port, "Found free port");
                return Ok(port);
            }
            Err(e) => tracing::debug!(port, error = %e, "Port unavailable"),
        }
    }

    Err(ServerError::NoFreePort { start, attempts })
}

/// Resolve `host:port` to the first matching socket address.
pub(crate) fn resolve(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    (host, port)
        .to_socket_addrs()
        .map_err(|e| ServerError::InvalidAddress(format!("{host}:{port}: {e}")))?
        .next()
        .ok_or_else(|| ServerError::InvalidAddress(format!("{host}:{port}")))
}

/// Bind the server listener.
///
/// With a fixed `port` the listener is bound to exactly that port. Otherwise
/// a free port is discovered first.
pub(crate) async fn bind_listener(
    host: &str,
    port: Option<u16>,
    discovery: PortDiscovery,
) -> Result<TcpListener, ServerError> {
    let port = match port {
        Some(port) => port,
        None => find_free_port(host, discovery.start, discovery.attempts)?,
    };
    let addr = resolve(host, port)?;

    TcpListener::bind(addr).await.map_err(|source| {
        if source.kind() == ErrorKind::AddrInUse {
            ServerError::PortInUse { port }
        } else {
            ServerError::Bind { addr, source }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "127.0.0.1";

    /// Bind `count` consecutive ports and keep them bound.
    fn occupy_block(count: u16) -> (u16, Vec<StdTcpListener>) {
        for base in (20_000..60_000).step_by(usize::from(count) + 7) {
            let held: Vec<_> = (base..base + count)
                .map_while(|port| StdTcpListener::bind((HOST, port)).ok())
                .collect();
            if held.len() == usize::from(count) {
                return (base, held);
            }
        }
        panic!("no block of {count} free ports available");
    }

    #[test]
    fn test_default_discovery_range() {
        let discovery = PortDiscovery::default();

        assert_eq!(discovery.start, 8000);
        assert_eq!(discovery.attempts, 10);
    }

    #[test]
    fn test_all_ports_occupied_returns_no_free_port() {
        let (start, _held) = occupy_block(10);

        let result = find_free_port(HOST, start, 10);

        assert!(
            matches!(result, Err(ServerError::NoFreePort { start: s, attempts: 10 }) if s == start),
            "expected NoFreePort, got {result:?}"
        );
    }

    #[test]
    fn test_first_port_occupied_returns_next() {
        let (start, mut held) = occupy_block(2);
        // Release start + 1, keep start bound
        held.truncate(1);

        let port = find_free_port(HOST, start, 10).unwrap();

        assert_eq!(port, start + 1);
    }

    #[test]
    fn test_free_start_port_is_returned() {
        let (start, held) = occupy_block(1);
        drop(held);

        let port = find_free_port(HOST, start, 10).unwrap();

        assert_eq!(port, start);
    }

    #[test]
    fn test_probe_releases_port() {
        let (start, held) = occupy_block(1);
        drop(held);

        let port = find_free_port(HOST, start, 1).unwrap();

        assert!(StdTcpListener::bind((HOST, port)).is_ok());
    }

    #[test]
    fn test_zero_attempts_returns_no_free_port() {
        let result = find_free_port(HOST, u16::MAX, 0);

        assert!(matches!(result, Err(ServerError::NoFreePort { .. })));
    }

    #[test]
    fn test_resolve_ip_literal() {
        let addr = resolve(HOST, 8000).unwrap();

        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 8000)));
    }

    #[tokio::test]
    async fn test_bind_fixed_port_in_use() {
        let (port, _held) = occupy_block(1);

        let result = bind_listener(HOST, Some(port), PortDiscovery::default()).await;

        assert!(
            matches!(result, Err(ServerError::PortInUse { port: p }) if p == port),
            "expected PortInUse, got {result:?}"
        );
    }

    #[tokio::test]
    async fn test_bind_discovers_port() {
        let (start, held) = occupy_block(2);
        drop(held);

        let listener = bind_listener(
            HOST,
            None,
            PortDiscovery {
                start,
                attempts: 2,
            },
        )
        .await
        .unwrap();

        assert_eq!(listener.local_addr().unwrap().port(), start);
    }
}
