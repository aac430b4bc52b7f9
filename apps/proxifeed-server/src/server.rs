use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait as _;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use posts::infra::storage::migrations::Migrator;
use posts::infra::storage::sea_orm_repo::SeaOrmPostsRepository;
use posts::PostsService;

use crate::config::AppConfig;

pub async fn run(config: AppConfig) -> Result<()> {
    // Geo misconfiguration is fatal before any traffic is served.
    let sector = config
        .sector_spec()
        .context("invalid nearby configuration")?;

    let conn = Database::connect(&config.database.dsn)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("failed to run migrations")?;
    tracing::info!("Database ready");

    let repo = Arc::new(SeaOrmPostsRepository::new(conn, sector));
    let service = Arc::new(PostsService::new(repo, config.posts.clone()));

    let api_doc = posts::api::rest::openapi();
    let app = Router::new()
        .merge(posts::api::rest::router(service))
        .route("/healthz", get(healthz))
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let doc = api_doc.clone();
                async move { Json(doc) }
            }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

/// SIGTERM for container runtimes, Ctrl-C everywhere else.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown: signal received");
}
