#![cfg(test)]
use configs::{AuthConfig, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::assets::AssetStore;

/// Per-test store: SQLite file plus asset root in one temp dir.
pub struct TestEnv {
    pub db: DatabaseConnection,
    pub assets: AssetStore,
    _dir: TempDir,
}

pub async fn get_env() -> Result<TestEnv, anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("site.db").display()),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    models::db::prepare(&db, &AuthConfig::default()).await?;
    let assets = AssetStore::new(dir.path().join("wwwroot"));
    Ok(TestEnv { db, assets, _dir: dir })
}
