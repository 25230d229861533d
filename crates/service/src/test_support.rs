#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::{DatabaseConnection, MockExecResult};
use tokio::sync::OnceCell;

// Migrations run once per test process; `false` means no database is reachable.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::from_file().unwrap_or_else(|_| DatabaseConfig::from_env());
    cfg.max_connections = cfg.max_connections.max(5);
    cfg.connect_timeout = std::time::Duration::from_secs(5);
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    cfg
}

/// Live database for tests, or `None` when `SKIP_DB_TESTS` is set or Postgres is down.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let ready = *MIGRATED
        .get_or_init(|| async {
            let db = match connect_with_config(&config()).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            match migration::Migrator::up(&db, None).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("skip: migrate up failed: {}", e);
                    false
                }
            }
        })
        .await;
    if !ready {
        return Ok(None);
    }
    Ok(Some(connect_with_config(&config()).await?))
}

pub fn exec_ok(rows_affected: u64) -> MockExecResult {
    MockExecResult { last_insert_id: 0, rows_affected }
}

/// Everything the mock connection executed, rendered for substring checks.
pub fn log_text(db: DatabaseConnection) -> String {
    format!("{:?}", db.into_transaction_log())
}
