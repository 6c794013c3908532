use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Singleton hero banner; handlers always operate on the lowest id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banner")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub image_path: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn first(db: &DatabaseConnection) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).one(db).await?)
}

/// Only used by seeding; the API never creates banners.
pub async fn create(db: &DatabaseConnection, title: &str, subtitle: &str, image_path: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        title: Set(title.to_string()),
        subtitle: Set(subtitle.to_string()),
        image_path: Set(image_path.to_string()),
        updated_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
