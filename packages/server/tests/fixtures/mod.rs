//! Test fixtures for integration tests.

use std::{net::SocketAddr, sync::Arc};

use repodex_server::ui::{serve, state::AppState};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// Server running on an ephemeral port with its own empty store.
///
/// Shut down when dropped.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let (shutdown, shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let state = Arc::new(AppState::in_memory());
            serve(listener, state, async {
                let _ = shutdown_rx.await;
            })
            .await
            .expect("Test server failed");
        });

        Self {
            addr,
            shutdown: Some(shutdown),
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        self.handle.abort();
    }
}
