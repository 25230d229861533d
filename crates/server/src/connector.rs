use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};
use tracing::debug;

use models::db::{self, DatabaseConfig};

/// Opens one database connection per request and releases it afterwards.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr>;

    async fn release(&self, conn: DatabaseConnection) -> Result<(), DbErr> {
        conn.close().await
    }
}

/// Postgres connector. The URL comes from `DATABASE_URL` at call time, falling back to
/// the configured `database.url`.
#[derive(Debug, Clone)]
pub struct PgConnector {
    settings: configs::DatabaseConfig,
}

impl PgConnector {
    pub fn new(settings: configs::DatabaseConfig) -> Self {
        Self { settings }
    }

    fn url(&self) -> Option<String> {
        db::database_url().or_else(|| {
            let configured = self.settings.url.trim();
            (!configured.is_empty()).then(|| configured.to_string())
        })
    }
}

#[async_trait]
impl Connector for PgConnector {
    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let url = self
            .url()
            .ok_or_else(|| DbErr::Custom("DATABASE_URL is not set".into()))?;
        debug!("opening request connection");
        db::connect_with_config(&DatabaseConfig::single(url, &self.settings)).await
    }
}
