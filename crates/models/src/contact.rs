use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{check_len, check_required, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub event_details: String,
    pub created_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

pub const FULL_NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 100;
pub const PHONE_MAX: usize = 20;

/// Inbound submission; `createdDate` is never taken from the client.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub event_details: String,
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    check_required("Email", email, EMAIL_MAX)?;
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ModelError::Validation("Email is not a valid email address".into()));
    }
    Ok(())
}

pub fn validate(input: &NewContact) -> Result<(), ModelError> {
    check_required("Full name", &input.full_name, FULL_NAME_MAX)?;
    validate_email(&input.email)?;
    if let Some(phone) = &input.phone {
        check_len("Phone", phone, PHONE_MAX)?;
    }
    if input.event_details.trim().is_empty() {
        return Err(ModelError::Validation("Event details is required".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: &NewContact) -> Result<Model, ModelError> {
    validate(input)?;
    let phone = input
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string);
    let am = ActiveModel {
        full_name: Set(input.full_name.trim().to_string()),
        email: Set(input.email.trim().to_string()),
        phone: Set(phone),
        event_details: Set(input.event_details.clone()),
        created_date: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list_newest_first(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedDate)
        .order_by_desc(Column::Id)
        .all(db)
        .await?)
}
