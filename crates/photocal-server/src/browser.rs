//! Best-effort browser launch.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay before launching, so the server is accepting connections.
const LAUNCH_DELAY: Duration = Duration::from_millis(1500);

/// Opens a URL in the default browser.
type Opener = fn(&str) -> io::Result<()>;

/// URL a local browser should use to reach the server at `addr`.
///
/// Unspecified bind addresses (`0.0.0.0`, `::`) are shown as `localhost`.
pub fn browser_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}", addr.port())
    } else {
        format!("http://{addr}")
    }
}

/// Open `url` in the default browser on a detached task.
pub(crate) fn spawn_launch(url: String) -> JoinHandle<()> {
    spawn_launch_with(url, LAUNCH_DELAY, |url| open::that(url))
}

fn spawn_launch_with(url: String, delay: Duration, opener: Opener) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let target = url.clone();
        match tokio::task::spawn_blocking(move || opener(&target)).await {
            Ok(Ok(())) => tracing::info!(url = %url, "Opened browser"),
            Ok(Err(e)) => {
                tracing::warn!(url = %url, error = %e, "Could not open browser, open the URL manually");
            }
            Err(e) => tracing::warn!(url = %url, error = %e, "Browser launch task failed"),
        }
    })
}
