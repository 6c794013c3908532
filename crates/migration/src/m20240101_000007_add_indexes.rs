use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // StaffAccount: emails are stored lower-cased, one row per address
        manager
            .create_index(
                Index::create()
                    .name("uniq_staff_account_email")
                    .table(StaffAccount::Table)
                    .col(StaffAccount::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Contact: listed newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_created_date")
                    .table(Contact::Table)
                    .col(Contact::CreatedDate)
                    .to_owned(),
            )
            .await?;

        // Service: listed newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_service_created_at")
                    .table(Service::Table)
                    .col(Service::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_staff_account_email").table(StaffAccount::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_created_date").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_created_at").table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StaffAccount { Table, Email }

#[derive(DeriveIden)]
enum Contact { Table, CreatedDate }

#[derive(DeriveIden)]
enum Service { Table, CreatedAt }
