use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    assets::AssetStore,
    auth::{repo::seaorm::SeaOrmStaffRepository, AuthService},
};

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub assets: AssetStore,
    pub auth: Arc<AuthService<SeaOrmStaffRepository>>,
    /// Used when an event has no image.
    pub default_event_image: String,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, assets: AssetStore, default_event_image: impl Into<String>) -> Self {
        let repo = Arc::new(SeaOrmStaffRepository { db: db.clone() });
        Self {
            db,
            assets,
            auth: Arc::new(AuthService::new(repo)),
            default_event_image: default_event_image.into(),
        }
    }
}
