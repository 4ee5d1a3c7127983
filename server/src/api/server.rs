//! API server initialization

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{self, AllowedOrigins};
use super::openapi::openapi_json;
use super::routes::{employees, health, presets, seed};
use crate::core::CoreApp;
use crate::core::constants::DEFAULT_BODY_LIMIT;
use crate::data::DirectoryService;

pub struct ApiServer {
    app: CoreApp,
    allowed_origins: AllowedOrigins,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        let server = &app.config.server;
        let allowed_origins = AllowedOrigins::new(&server.host, server.port, &server.cors_origins);

        Self {
            app,
            allowed_origins,
        }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self {
            app,
            allowed_origins,
        } = self;

        let shutdown = app.shutdown.clone();
        let addr = SocketAddr::new(app.config.server.host.parse()?, app.config.server.port);

        let router = build_router(
            app.database.clone(),
            app.config.seed.employees,
            &allowed_origins,
        );

        let listener = TcpListener::bind(addr).await?;
        tracing::debug!(%addr, "Listening");
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}

/// Assemble the full HTTP router
pub fn build_router(
    database: Arc<DirectoryService>,
    seed_employees: usize,
    allowed_origins: &AllowedOrigins,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Hello" }))
        .route("/api/health", get(health::health))
        .route("/api/openapi.json", get(openapi_json))
        .nest("/api/employees", employees::routes(database.clone()))
        .nest("/api/presets", presets::routes(database.clone()))
        .nest("/api/seed", seed::routes(database, seed_employees))
        .fallback(middleware::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(middleware::cors(allowed_origins))
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
}
