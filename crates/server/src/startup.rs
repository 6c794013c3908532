use std::net::SocketAddr;

use axum::{http::HeaderValue, Router};
use configs::{AppConfig, CorsConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use service::{assets::AssetStore, runtime};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Empty origin list means any origin.
pub fn build_cors(cfg: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Connect, migrate, seed and assemble the router for the given configuration.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_env(&cfg.assets.root)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::prepare(&db, &cfg.auth).await?;

    let state = ServerState::new(db, AssetStore::new(&cfg.assets.root), cfg.assets.default_event_image.clone());
    Ok(routes::build_router(state, build_cors(&cfg.cors), cfg.server.max_body_bytes))
}

/// Serve the app for an already loaded configuration until the listener fails.
/// Logging and `.env` are the caller's concern.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, assets = %cfg.assets.root, sqlite = cfg.database.is_sqlite(), "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
