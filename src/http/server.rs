//! # HTTP Server
//!
//! Assembles the router, middleware, and listener.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::PersonStore;

use super::config::ServerConfig;
use super::routes::{person_routes, AppState};

/// HTTP server for the phonebook service
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around an explicitly injected store.
    pub fn new(store: Arc<dyn PersonStore>, config: ServerConfig) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the router with request tracing and CORS applied.
    fn build_router(store: Arc<dyn PersonStore>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        person_routes(AppState::new(store))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        tracing::info!("server running on port {}", self.config.port);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_server_creation() {
        let store = Arc::new(MemoryStore::new());
        let server = HttpServer::new(store, ServerConfig::default());
        assert_eq!(server.socket_addr(), "0.0.0.0:3001");
        let _router = server.router();
    }
}
