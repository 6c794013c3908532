//! Create `portfolio_image` table.
//!
//! Each row owns one file in the asset root; `created_by`/`updated_by` carry the audit actor.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioImage::Table)
                    .if_not_exists()
                    .col(pk_auto(PortfolioImage::Id))
                    .col(string_len(PortfolioImage::ImagePath, 500).not_null())
                    .col(string_len(PortfolioImage::CreatedBy, 100).not_null())
                    .col(string_len(PortfolioImage::UpdatedBy, 100).not_null())
                    .col(timestamp_with_time_zone(PortfolioImage::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(PortfolioImage::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PortfolioImage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PortfolioImage { Table, Id, ImagePath, CreatedBy, UpdatedBy, CreatedAt, UpdatedAt }
