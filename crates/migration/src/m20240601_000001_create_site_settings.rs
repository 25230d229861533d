//! Create `site_settings` table.
//!
//! Holds the storefront name and description. The row with the highest id is the
//! current one; admin edits always target id 1, so the migration seeds that row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(SiteSettings::Id))
                    .col(text(SiteSettings::SiteName))
                    .col(text(SiteSettings::SiteDescription))
                    .col(
                        timestamp_with_time_zone(SiteSettings::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(SiteSettings::Table)
                    .columns([SiteSettings::SiteName, SiteSettings::SiteDescription])
                    .values_panic(["Boost Store".into(), "Game account boosting services".into()])
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SiteSettings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SiteSettings { Table, Id, SiteName, SiteDescription, UpdatedAt }
