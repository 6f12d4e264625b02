use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// ─── Built-in target server ──────────────────────────────────────

/// The minimal endpoint the harness benchmarks when no external URL
/// is given: a single static route answering `hello world`.
pub struct TargetServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TargetServer {
    /// Bind 127.0.0.1 on `port` (0 = ephemeral) and serve on a
    /// background task. The listener is bound before this returns,
    /// so the target is immediately probeable.
    pub async fn spawn(port: u16) -> std::io::Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", port)).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            // Runs until the harness drops the server.
            let _ = axum::serve(listener, create_router()).await;
        });

        Ok(Self { addr, handle })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Full URL of the benchmark route.
    pub fn test_url(&self) -> String {
        format!("http://{}/test", self.addr)
    }
}

impl Drop for TargetServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Router with the single static benchmark route.
pub fn create_router() -> Router {
    Router::new().route("/test", get(|| async { "hello world" }))
}
