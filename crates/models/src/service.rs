use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{check_len, ModelError};

pub const TITLE_MAX: usize = 100;

/// Service catalog entry. `image_path` is root-relative, e.g. `./img/catering.jpg`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub image_path: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Trim and bound-check a title; `None` when blank.
pub fn normalize_title(title: &str) -> Result<Option<String>, ModelError> {
    let t = title.trim();
    if t.is_empty() {
        return Ok(None);
    }
    check_len("Title", t, TITLE_MAX)?;
    Ok(Some(t.to_string()))
}

pub async fn create(db: &DatabaseConnection, title: &str, image_path: &str) -> Result<Model, ModelError> {
    check_len("Image path", image_path, 500)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        title: Set(title.to_string()),
        image_path: Set(image_path.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list_newest_first(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_bounded() {
        assert_eq!(normalize_title("  Catering ").unwrap().as_deref(), Some("Catering"));
        assert!(normalize_title("   ").unwrap().is_none());
        assert!(normalize_title(&"t".repeat(TITLE_MAX + 1)).is_err());
    }
}
