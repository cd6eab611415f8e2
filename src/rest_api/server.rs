//! # HTTP Server
//!
//! Combines the catalog routes, health check and front-end assets into one
//! Axum router and serves it.

use std::sync::Arc;

use axum::extract::Request;
use axum::{middleware, routing::get, Json, Router, ServiceExt};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::{Layer, ServiceBuilder};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::catalog::Catalog;
use crate::observability::Logger;

use super::config::ServerConfig;
use super::observe::log_requests;
use super::routes::catalog_routes;

/// The served application: the combined router behind trailing-slash
/// normalization, so `/restaurants/` routes like `/restaurants`.
pub type CatalogApp = NormalizePath<Router>;

/// HTTP server for the catalog
pub struct CatalogServer {
    config: ServerConfig,
    app: CatalogApp,
}

impl CatalogServer {
    /// Create a server over an opened catalog
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        let router = Self::build_router(&config, Arc::new(catalog));
        // Applied outside the router so the path is rewritten before routing
        let app = NormalizePathLayer::trim_trailing_slash().layer(router);
        Self { config, app }
    }

    /// Build the combined router
    fn build_router(config: &ServerConfig, catalog: Arc<Catalog>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health))
            .merge(catalog_routes(catalog))
            // Front-end index page and assets
            .route_service("/", ServeFile::new(&config.index_page))
            .fallback_service(ServeDir::new(&config.static_dir))
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn(log_requests))
                    .layer(cors),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the application service (for testing)
    pub fn app(self) -> CatalogApp {
        self.app
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?.to_string();
        Logger::info("SERVER_START", &[("addr", &addr)]);

        axum::serve(listener, ServiceExt::<Request>::into_make_service(self.app)).await
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStorage;

    fn catalog() -> Catalog {
        Catalog::new(Arc::new(SqliteStorage::open_in_memory().unwrap()))
    }

    #[test]
    fn test_server_creation() {
        let server = CatalogServer::new(ServerConfig::default(), catalog());
        assert_eq!(server.socket_addr(), "0.0.0.0:3010");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = CatalogServer::new(ServerConfig::with_port(8080), catalog());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _app = CatalogServer::new(config, catalog()).app();
    }
}
