//! Embedded server on an ephemeral localhost port.
//!
//! Binds `127.0.0.1:0`, lets the OS pick a free port, and serves the normal
//! router from a background task. Used to run a real server inside another
//! process (integration tests, tooling).
//!
//! # Usage
//!
//! ```ignore
//! use homedash_axum::embedded::start_embedded_server;
//!
//! let (info, handle) = start_embedded_server(ctx, &CorsConfig::AllowAll).await?;
//! println!("API available at {}", info.api_url());
//! ```

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::routes::create_router;

/// Address of a running embedded server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedServerInfo {
    /// The bound socket address.
    pub addr: SocketAddr,
}

impl EmbeddedServerInfo {
    /// The ephemeral port the server is listening on.
    pub const fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Base URL of the REST API, e.g. `http://127.0.0.1:41234/api`.
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

/// Start the router on an ephemeral localhost port.
///
/// Returns once the listener is bound, so requests can be sent immediately.
/// Abort the join handle to stop the server.
pub async fn start_embedded_server(
    ctx: AxumContext,
    cors: &CorsConfig,
) -> anyhow::Result<(EmbeddedServerInfo, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = create_router(ctx, cors);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(target: "homedash.api", error = %e, "Embedded server stopped");
        }
    });

    tracing::debug!(target: "homedash.api", %addr, "Embedded server listening");
    Ok((EmbeddedServerInfo { addr }, handle))
}
