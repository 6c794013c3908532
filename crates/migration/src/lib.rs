//! Migrator registering one migration per content table.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_staff_account;
mod m20240101_000002_create_banner;
mod m20240101_000003_create_contact;
mod m20240101_000004_create_event;
mod m20240101_000005_create_portfolio_image;
mod m20240101_000006_create_service;
mod m20240101_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_staff_account::Migration),
            Box::new(m20240101_000002_create_banner::Migration),
            Box::new(m20240101_000003_create_contact::Migration),
            Box::new(m20240101_000004_create_event::Migration),
            Box::new(m20240101_000005_create_portfolio_image::Migration),
            Box::new(m20240101_000006_create_service::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000007_add_indexes::Migration),
        ]
    }
}
