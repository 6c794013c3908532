use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "staff_account")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert one roster entry. The email is stored trimmed and lower-cased.
pub async fn create(db: &DatabaseConnection, email: &str, password: &str, role: &str) -> Result<Model, ModelError> {
    let email = email.trim().to_lowercase();
    if !email.contains('@') { return Err(ModelError::Validation("invalid email".into())); }
    if password.is_empty() { return Err(ModelError::Validation("password required".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        email: Set(email),
        password: Set(password.to_string()),
        role: Set(role.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}
