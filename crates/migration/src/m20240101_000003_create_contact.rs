//! Create `contact` table.
//!
//! Inbound contact-form submissions; append-only.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string_len(Contact::FullName, 100).not_null())
                    .col(string_len(Contact::Email, 100).not_null())
                    .col(
                        ColumnDef::new(Contact::Phone)
                            .string_len(20)
                            .null(),
                    )
                    .col(text(Contact::EventDetails).not_null())
                    .col(timestamp_with_time_zone(Contact::CreatedDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, Id, FullName, Email, Phone, EventDetails, CreatedDate }
