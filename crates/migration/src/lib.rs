//! Migrator for the storefront schema.
//! Production databases already carry these tables; the server only applies the
//! migrations when asked to (`RUN_MIGRATIONS=1`), and the test suites apply them to
//! their scratch database.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_site_settings;
mod m20240601_000002_create_services;
mod m20240601_000003_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_site_settings::Migration),
            Box::new(m20240601_000002_create_services::Migration),
            // orders references services
            Box::new(m20240601_000003_create_orders::Migration),
        ]
    }
}
