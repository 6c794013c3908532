use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{check_required, ModelError};

/// Audit actor recorded on rows created through the public upload endpoint.
pub const SYSTEM_ACTOR: &str = "system";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_image")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// File name only, resolved against the asset root.
    pub image_path: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, image_path: &str) -> Result<Model, ModelError> {
    check_required("Image path", image_path, 500)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        image_path: Set(image_path.to_string()),
        created_by: Set(SYSTEM_ACTOR.to_string()),
        updated_by: Set(SYSTEM_ACTOR.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}
