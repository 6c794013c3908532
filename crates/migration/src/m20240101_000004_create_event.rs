//! Create `event` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string_len(Event::Title, 255).not_null())
                    .col(string_len(Event::Date, 100).not_null())
                    .col(string_len(Event::Detail, 500).not_null())
                    .col(string_len(Event::Image, 500).not_null())
                    .col(string_len(Event::ButtonText, 100).not_null())
                    .col(timestamp_with_time_zone(Event::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Event::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Event::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Event { Table, Id, Title, Date, Detail, Image, ButtonText, CreatedAt, UpdatedAt }
