use anyhow::Result;
use configs::AuthConfig;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::setup_test_db;
use crate::{banner, seed, staff_account};

#[tokio::test]
async fn prepare_seeds_roster_and_banner() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let staff = staff_account::list(&db).await?;
    assert_eq!(staff.len(), 2);
    assert_eq!(staff[0].email, "staff@gmail.com");
    assert_eq!(staff[0].role, "staff");
    assert_eq!(staff[1].role, "admin");

    let b = banner::first(&db).await?.expect("seeded banner");
    assert_eq!(b.title, seed::DEFAULT_BANNER_TITLE);
    Ok(())
}

#[tokio::test]
async fn seeding_is_idempotent() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;
    crate::db::prepare(&db, &AuthConfig::default()).await?;
    seed::run(&db, &AuthConfig::default()).await?;

    assert_eq!(staff_account::Entity::find().count(&db).await?, 2);
    assert_eq!(banner::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[test]
fn staff_password_is_not_serialized() {
    let now = chrono::Utc::now().into();
    let m = staff_account::Model {
        id: 1,
        email: "staff@gmail.com".into(),
        password: "staff123".into(),
        role: "staff".into(),
        created_at: now,
        updated_at: now,
    };
    let v = serde_json::to_value(&m).unwrap();
    assert!(v.get("password").is_none());
    assert_eq!(v["email"], "staff@gmail.com");
    assert!(v.get("createdAt").is_some());
}
