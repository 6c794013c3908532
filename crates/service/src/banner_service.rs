use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::{info, instrument};

use models::banner;
use crate::{
    assets::{prefixed_unique_name, AssetStore, UploadedFile, BANNER_DIR},
    errors::ServiceError,
};

/// Partial update: blank text fields and empty files are ignored.
#[derive(Debug, Default)]
pub struct BannerUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<UploadedFile>,
}

/// The singleton banner row.
pub async fn get_banner(db: &DatabaseConnection) -> Result<banner::Model, ServiceError> {
    banner::first(db).await?.ok_or_else(|| ServiceError::not_found("Banner"))
}

/// Update the banner in place. Never creates a row; `updated_at` is refreshed on every call.
#[instrument(skip(db, assets, update))]
pub async fn update_banner(
    db: &DatabaseConnection,
    assets: &AssetStore,
    update: BannerUpdate,
) -> Result<banner::Model, ServiceError> {
    let existing = get_banner(db).await?;
    let mut am: banner::ActiveModel = existing.into();

    if let Some(t) = non_blank(update.title) { am.title = Set(t); }
    if let Some(s) = non_blank(update.subtitle) { am.subtitle = Set(s); }

    let mut written = None;
    if let Some(file) = update.image.filter(|f| !f.is_empty()) {
        assets.ensure_dir(BANNER_DIR).await?;
        let rel = format!("{}/{}", BANNER_DIR, prefixed_unique_name(&file.file_name));
        assets.write(&rel, &file.bytes).await?;
        am.image_path = Set(rel.clone());
        written = Some(rel);
    }
    am.updated_at = Set(Utc::now().into());

    match am.update(db).await {
        Ok(updated) => {
            info!(id = updated.id, image = %updated.image_path, "banner_updated");
            Ok(updated)
        }
        Err(e) => {
            if let Some(rel) = written {
                assets.remove_best_effort(&rel).await;
            }
            Err(e.into())
        }
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
