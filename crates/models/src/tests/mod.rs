/// Store initialisation tests
pub mod db_tests;


use configs::{AuthConfig, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Fresh SQLite file in a temp dir, migrated and seeded.
/// The `TempDir` must outlive the connection.
pub(crate) async fn setup_test_db() -> anyhow::Result<(TempDir, DatabaseConnection)> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display()),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = crate::db::connect_with_config(&cfg).await?;
    crate::db::prepare(&db, &AuthConfig::default()).await?;
    Ok((dir, db))
}
