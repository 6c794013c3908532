use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use models::event::{self, EventInput};
use crate::errors::ServiceError;

/// Events with `image` rewritten to an absolute URL for the given request origin.
/// Read-time only; stored rows are left as they are.
pub async fn list_events(
    db: &DatabaseConnection,
    origin: &str,
    default_image: &str,
) -> Result<Vec<event::Model>, ServiceError> {
    let rows = event::list(db).await?;
    Ok(rows
        .into_iter()
        .map(|mut e| {
            e.image = absolute_image_url(&e.image, origin, default_image);
            e
        })
        .collect())
}

/// Empty -> default image; `http...` untouched; anything else prefixed with `origin`.
pub fn absolute_image_url(image: &str, origin: &str, default_image: &str) -> String {
    let image = image.trim();
    if image.is_empty() {
        return absolute_image_url(default_image, origin, "");
    }
    if image.starts_with("http") {
        return image.to_string();
    }
    let path = image.trim_start_matches("./").trim_start_matches('/');
    format!("{}/{}", origin.trim_end_matches('/'), path)
}

/// Replace the whole collection: validate everything, then delete + insert in one transaction
/// so concurrent readers never see the table empty mid-replace.
#[instrument(skip(db, inputs), fields(count = inputs.len()))]
pub async fn replace_all_events(
    db: &DatabaseConnection,
    inputs: Vec<EventInput>,
) -> Result<Vec<event::Model>, ServiceError> {
    for input in &inputs {
        event::validate(input)?;
    }

    let txn = db.begin().await?;
    let removed = event::delete_all(&txn).await?;
    let mut saved = Vec::with_capacity(inputs.len());
    for input in &inputs {
        saved.push(event::insert(&txn, input).await?);
    }
    txn.commit().await?;

    info!(removed, inserted = saved.len(), "events_replaced");
    Ok(saved)
}
