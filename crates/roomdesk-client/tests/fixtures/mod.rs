use std::sync::Arc;

use tokio::sync::RwLock;

use roomdesk_server::routes::{router, AppState};
use roomdesk_server::store::RoomStore;

/// Runs the real booking server in-process on an ephemeral port.
pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(RoomStore::new()).await
    }

    pub async fn start_seeded() -> Self {
        Self::start_with(RoomStore::with_sample_rooms()).await
    }

    async fn start_with(store: RoomStore) -> Self {
        let state = Arc::new(AppState {
            store: RwLock::new(store),
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, router(state))
                .await
                .expect("Test server stopped");
        });

        Self {
            base_url: format!("http://{}", addr),
        }
    }
}
