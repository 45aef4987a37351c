use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use service::beer::{
    loader,
    repo::seaorm::SeaOrmBeerRepository,
    repository::{memory::InMemoryBeerRepository, BeerRepository},
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Postgres when `database.url` is set, otherwise an in-memory store.
pub async fn build_repository(cfg: &DatabaseConfig) -> anyhow::Result<Arc<dyn BeerRepository>> {
    if !cfg.is_configured() {
        warn!(event = "in_memory_store", "database.url not set; beers are kept in memory only");
        return Ok(Arc::new(InMemoryBeerRepository::new()));
    }
    let db = models::db::connect_with_config(cfg).await?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }
    Ok(Arc::new(SeaOrmBeerRepository { db }))
}

/// Wire the repository, seed it if asked to, and build the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let repo = build_repository(&cfg.database).await?;
    if cfg.bootstrap.load_sample_data {
        let n = loader::load_sample_beers(repo.as_ref()).await?;
        info!(event = "seed_done", inserted = n, "sample data checked");
    }
    let state = ServerState::new(repo);
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and serve until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "beer service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}
