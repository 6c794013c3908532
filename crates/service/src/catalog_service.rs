//! Service catalog: titled entries, each owning one image under `<asset root>/img`.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::{info, instrument};

use models::service as catalog;
use crate::{
    assets::{
        catalog_rel_path, sanitize_catalog_file_name, validate_catalog_image, AssetStore, UploadedFile,
        CATALOG_DIR, CATALOG_PATH_PREFIX,
    },
    errors::ServiceError,
};

/// Newest first.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<catalog::Model>, ServiceError> {
    Ok(catalog::list_newest_first(db).await?)
}

/// Checks run in order: title, image present, extension, size.
#[instrument(skip(db, assets, title, image))]
pub async fn create_service(
    db: &DatabaseConnection,
    assets: &AssetStore,
    title: Option<&str>,
    image: Option<UploadedFile>,
) -> Result<catalog::Model, ServiceError> {
    let title = catalog::normalize_title(title.unwrap_or_default())?
        .ok_or_else(|| ServiceError::Validation("Title is required.".into()))?;
    let file = validate_catalog_image(image.as_ref())?;

    let (rel, image_path) = store_image(assets, file).await?;
    match catalog::create(db, &title, &image_path).await {
        Ok(row) => {
            info!(id = row.id, %image_path, "service_created");
            Ok(row)
        }
        Err(e) => {
            assets.remove_best_effort(&rel).await;
            Err(e.into())
        }
    }
}

/// Optional new title and/or image. The superseded file is removed only after the row update lands.
#[instrument(skip(db, assets, title, image))]
pub async fn update_service(
    db: &DatabaseConnection,
    assets: &AssetStore,
    id: i32,
    title: Option<&str>,
    image: Option<UploadedFile>,
) -> Result<catalog::Model, ServiceError> {
    let existing = catalog::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Service"))?;

    let new_title = catalog::normalize_title(title.unwrap_or_default())?;
    let image = image.filter(|f| !f.is_empty());
    if let Some(file) = image.as_ref() {
        validate_catalog_image(Some(file))?;
    }

    let old_image_path = existing.image_path.clone();
    let mut am: catalog::ActiveModel = existing.into();
    if let Some(t) = new_title {
        am.title = Set(t);
    }

    let mut written = None;
    if let Some(file) = image.as_ref() {
        let (rel, image_path) = store_image(assets, file).await?;
        am.image_path = Set(image_path);
        written = Some(rel);
    }
    am.updated_at = Set(Utc::now().into());

    let updated = match am.update(db).await {
        Ok(m) => m,
        Err(e) => {
            if let Some(rel) = written {
                assets.remove_best_effort(&rel).await;
            }
            return Err(e.into());
        }
    };

    if written.is_some() && updated.image_path != old_image_path {
        if let Some(old_rel) = catalog_rel_path(&old_image_path) {
            assets.remove_best_effort(&old_rel).await;
        }
    }
    info!(id = updated.id, "service_updated");
    Ok(updated)
}

/// Remove the image (best-effort, `./img/` paths only) and then the row. Returns the deleted id.
#[instrument(skip(db, assets))]
pub async fn delete_service(db: &DatabaseConnection, assets: &AssetStore, id: i32) -> Result<i32, ServiceError> {
    let existing = catalog::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Service"))?;

    if let Some(rel) = catalog_rel_path(&existing.image_path) {
        assets.remove_best_effort(&rel).await;
    }
    catalog::Entity::delete_by_id(id).exec(db).await?;
    info!(id, "service_deleted");
    Ok(id)
}

/// Sanitize, pick a free name in `img/`, write. Returns (store-relative path, recorded image path).
async fn store_image(assets: &AssetStore, file: &UploadedFile) -> Result<(String, String), ServiceError> {
    let sanitized = sanitize_catalog_file_name(&file.file_name);
    let final_name = assets.unique_name_in(CATALOG_DIR, &sanitized).await?;
    let rel = format!("{CATALOG_DIR}/{final_name}");
    assets.write(&rel, &file.bytes).await?;
    Ok((rel, format!("{CATALOG_PATH_PREFIX}{final_name}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MAX_IMAGE_BYTES;
    use crate::test_support::get_env;

    fn png(name: &str) -> Option<UploadedFile> {
        Some(UploadedFile::new(name, vec![0x89, b'P', b'N', b'G']))
    }

    #[tokio::test]
    async fn same_file_name_gets_suffixes() -> anyhow::Result<()> {
        let env = get_env().await?;
        let a = create_service(&env.db, &env.assets, Some("Decor"), png("Stage Lights.PNG")).await?;
        let b = create_service(&env.db, &env.assets, Some("Decor 2"), png("Stage Lights.PNG")).await?;
        let c = create_service(&env.db, &env.assets, Some("Decor 3"), png("Stage Lights.PNG")).await?;

        assert_eq!(a.image_path, "./img/stage_lights.png");
        assert_eq!(b.image_path, "./img/stage_lights_1.png");
        assert_eq!(c.image_path, "./img/stage_lights_2.png");
        assert_ne!(a.id, b.id);
        assert!(env.assets.exists("img/stage_lights_1.png").await);
        Ok(())
    }

    #[tokio::test]
    async fn validation_failures_persist_nothing() -> anyhow::Result<()> {
        let env = get_env().await?;

        let err = create_service(&env.db, &env.assets, Some("  "), png("a.png")).await.unwrap_err();
        assert_eq!(err.client_message(), "Title is required.");

        let err = create_service(&env.db, &env.assets, Some("T"), None).await.unwrap_err();
        assert_eq!(err.client_message(), "Image is required.");

        let err = create_service(&env.db, &env.assets, Some("T"), png("a.bmp")).await.unwrap_err();
        assert!(err.client_message().starts_with("Invalid file type"));

        let big = Some(UploadedFile::new("a.png", vec![0; MAX_IMAGE_BYTES + 1]));
        let err = create_service(&env.db, &env.assets, Some("T"), big).await.unwrap_err();
        assert!(err.is_validation());

        assert!(list_services(&env.db).await?.is_empty());
        assert!(!env.assets.exists("img/a.png").await);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_image_and_removes_old_file() -> anyhow::Result<()> {
        let env = get_env().await?;
        let created = create_service(&env.db, &env.assets, Some("Catering"), png("food.png")).await?;

        let updated = update_service(&env.db, &env.assets, created.id, Some(" Fine Catering "), png("menu.webp")).await?;
        assert_eq!(updated.title, "Fine Catering");
        assert_eq!(updated.image_path, "./img/menu.webp");
        assert!(updated.updated_at > created.updated_at);
        assert!(!env.assets.exists("img/food.png").await);
        assert!(env.assets.exists("img/menu.webp").await);
        Ok(())
    }

    #[tokio::test]
    async fn update_title_only_keeps_image() -> anyhow::Result<()> {
        let env = get_env().await?;
        let created = create_service(&env.db, &env.assets, Some("Catering"), png("food.png")).await?;
        let updated = update_service(&env.db, &env.assets, created.id, None, None).await?;
        assert_eq!(updated.title, "Catering");
        assert_eq!(updated.image_path, created.image_path);
        assert!(env.assets.exists("img/food.png").await);

        let err = update_service(&env.db, &env.assets, created.id, None, png("x.bmp")).await.unwrap_err();
        assert!(err.is_validation());
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_id_touches_nothing() -> anyhow::Result<()> {
        let env = get_env().await?;
        let created = create_service(&env.db, &env.assets, Some("Catering"), png("food.png")).await?;

        let err = delete_service(&env.db, &env.assets, created.id + 100).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(list_services(&env.db).await?.len(), 1);
        assert!(env.assets.exists("img/food.png").await);

        assert_eq!(delete_service(&env.db, &env.assets, created.id).await?, created.id);
        assert!(list_services(&env.db).await?.is_empty());
        assert!(!env.assets.exists("img/food.png").await);
        Ok(())
    }
}
