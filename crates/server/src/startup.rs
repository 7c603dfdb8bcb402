use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, DatabaseConfig};
use dotenvy::dotenv;
use service::seed::seed_demo_data;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, migrate, optionally seed, and assemble the router.
pub async fn build_app(db_cfg: &DatabaseConfig, seed: bool) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(db_cfg).await?;
    models::db::migrate(&db).await?;

    let state = ServerState::from_db(db);
    if seed {
        let report = seed_demo_data(state.labs.as_ref(), state.results.as_ref()).await?;
        info!(labs = report.labs_created, results = report.results_created, "demo data seeded");
    }
    Ok(routes::build_router(state, build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        return;
    }
    info!("shutdown signal received");
}

/// Public entry: load configuration, build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_or_env()?;
    let app = build_app(&cfg.database, cfg.seed.enabled).await?;

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting lab results server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
