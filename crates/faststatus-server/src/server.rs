use std::sync::Arc;

use tokio::net::TcpListener;

use faststatus_store::RedbResourceStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::SharedStore;

/// Current resource status server.
pub struct StatusServer {
    config: ServerConfig,
}

impl StatusServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router over an arbitrary store (useful for testing).
    pub fn router(&self, store: SharedStore) -> axum::Router {
        build_router(store)
    }

    /// Open the database and serve requests.
    pub async fn serve(self) -> ServerResult<()> {
        let store: SharedStore = Arc::new(RedbResourceStore::open(&self.config.db_path)?);
        let app = build_router(store);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("faststatus server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
