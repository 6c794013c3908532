use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{check_len, check_required, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Free-text label such as "Every Saturday".
    pub date: String,
    pub detail: String,
    /// Path under the asset root or an absolute URL.
    pub image: String,
    pub button_text: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// One element of a whole-collection replace. Any client `id` is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub button_text: String,
}

pub fn validate(input: &EventInput) -> Result<(), ModelError> {
    check_required("Title", &input.title, 255)?;
    check_len("Date", &input.date, 100)?;
    check_required("Detail", &input.detail, 500)?;
    check_required("Image", &input.image, 500)?;
    check_len("Button text", &input.button_text, 100)?;
    Ok(())
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Insert with a store-assigned id and fresh timestamps.
pub async fn insert<C: ConnectionTrait>(db: &C, input: &EventInput) -> Result<Model, ModelError> {
    validate(input)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        title: Set(input.title.clone()),
        date: Set(input.date.clone()),
        detail: Set(input.detail.clone()),
        image: Set(input.image.clone()),
        button_text: Set(input.button_text.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn delete_all<C: ConnectionTrait>(db: &C) -> Result<u64, ModelError> {
    let res = Entity::delete_many().exec(db).await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_title_detail_image() {
        let ok = EventInput {
            title: "Gala".into(),
            detail: "Black tie".into(),
            image: "img/events/gala.jpg".into(),
            ..Default::default()
        };
        assert!(validate(&ok).is_ok());

        let mut missing = ok.clone();
        missing.detail.clear();
        assert!(validate(&missing).is_err());

        let mut long = ok;
        long.date = "d".repeat(101);
        assert!(validate(&long).is_err());
    }
}
