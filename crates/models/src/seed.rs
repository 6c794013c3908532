//! Store initialisation: the staff roster and the singleton banner row.
//!
//! Both are inserted only when their table is empty, so repeated startups are no-ops.

use configs::AuthConfig;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::{banner, errors::ModelError, staff_account};

pub const DEFAULT_BANNER_TITLE: &str = "Unforgettable Events, Perfectly Planned";
pub const DEFAULT_BANNER_SUBTITLE: &str = "Weddings, corporate galas and private parties handled end to end";
pub const DEFAULT_BANNER_IMAGE: &str = "img/banner/default.jpg";

pub async fn run(db: &DatabaseConnection, auth: &AuthConfig) -> Result<(), ModelError> {
    let staff = staff_account::Entity::find().count(db).await?;
    if staff == 0 {
        for s in &auth.staff {
            staff_account::create(db, &s.email, &s.password, &s.role).await?;
        }
        info!(count = auth.staff.len(), "seeded staff roster");
    }

    let banners = banner::Entity::find().count(db).await?;
    if banners == 0 {
        banner::create(db, DEFAULT_BANNER_TITLE, DEFAULT_BANNER_SUBTITLE, DEFAULT_BANNER_IMAGE).await?;
        info!("seeded default banner");
    }
    Ok(())
}
