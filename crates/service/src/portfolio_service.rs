use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{info, instrument, warn};

use models::portfolio_image;
use crate::{
    assets::{portfolio_file_name, AssetStore, UploadedFile, BANNER_DIR, CATALOG_DIR},
    errors::ServiceError,
};

pub async fn list_portfolio(db: &DatabaseConnection) -> Result<Vec<portfolio_image::Model>, ServiceError> {
    Ok(portfolio_image::list(db).await?)
}

/// Store the file at the asset root under its sanitized name, then insert the row.
///
/// No collision avoidance: a second upload with the same sanitized name overwrites the
/// earlier file while still creating a new row.
#[instrument(skip(db, assets, file))]
pub async fn upload_portfolio_image(
    db: &DatabaseConnection,
    assets: &AssetStore,
    file: Option<UploadedFile>,
) -> Result<portfolio_image::Model, ServiceError> {
    let file = match file {
        Some(f) if !f.is_empty() => f,
        _ => return Err(ServiceError::Validation("No file uploaded.".into())),
    };
    let name = portfolio_file_name(&file.file_name);
    let reserved = name.eq_ignore_ascii_case(CATALOG_DIR) || name.eq_ignore_ascii_case(BANNER_DIR);
    if name.is_empty() || name == "." || name == ".." || reserved || assets.is_dir(&name).await {
        return Err(ServiceError::Validation("Invalid file name.".into()));
    }

    // an overwritten file still belongs to an earlier row, so it must survive a failed insert
    let overwrote = assets.exists(&name).await;
    if overwrote {
        warn!(%name, "portfolio upload overwrites an existing file");
    }
    assets.ensure_dir("").await?;
    assets.write(&name, &file.bytes).await?;

    match portfolio_image::create(db, &name).await {
        Ok(row) => {
            info!(id = row.id, %name, "portfolio_image_uploaded");
            Ok(row)
        }
        Err(e) => {
            if overwrote {
                warn!(%name, error = %e, "insert failed after overwriting a shared file; leaving it in place");
            } else {
                assets.remove_best_effort(&name).await;
            }
            Err(e.into())
        }
    }
}

/// Remove the backing file (best-effort) and then the row.
#[instrument(skip(db, assets))]
pub async fn delete_portfolio_image(
    db: &DatabaseConnection,
    assets: &AssetStore,
    id: i32,
) -> Result<(), ServiceError> {
    let row = portfolio_image::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Image"))?;

    let removed = assets.remove_best_effort(&row.image_path).await;
    portfolio_image::Entity::delete_by_id(id).exec(db).await?;
    info!(id, file_removed = removed, "portfolio_image_deleted");
    Ok(())
}
