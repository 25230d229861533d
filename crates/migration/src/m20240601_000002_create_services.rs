//! Create `services` table.
//!
//! Catalog entries are never removed; `is_active = false` hides them from the
//! public listing.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(text(Services::Title))
                    .col(text(Services::Description))
                    .col(text(Services::Requirements))
                    .col(text(Services::Price))
                    .col(boolean(Services::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Services::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_services_is_active")
                    .table(Services::Table)
                    .col(Services::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    Requirements,
    Price,
    IsActive,
    UpdatedAt,
}
