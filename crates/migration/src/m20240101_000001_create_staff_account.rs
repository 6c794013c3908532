//! Create `staff_account` table.
//!
//! Holds the fixed staff roster; rows are seeded, never written by the API.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffAccount::Id))
                    .col(string_len(StaffAccount::Email, 255).not_null())
                    .col(string_len(StaffAccount::Password, 255).not_null())
                    .col(string_len(StaffAccount::Role, 32).not_null())
                    .col(timestamp_with_time_zone(StaffAccount::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(StaffAccount::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(StaffAccount::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum StaffAccount { Table, Id, Email, Password, Role, CreatedAt, UpdatedAt }
