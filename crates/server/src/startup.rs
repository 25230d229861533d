use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::AdminCredential;
use crate::connector::{Connector, PgConnector};
use crate::dispatch::Dispatcher;
use crate::routes;

pub const SERVICE: &str = "storefront";

/// `config.toml` (or `CONFIG_PATH`) when present, otherwise environment only.
pub fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            info!(reason = %e, "no usable config file; reading settings from environment");
            AppConfig::from_env()
        }
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    addr.parse().with_context(|| format!("invalid bind address {addr}"))
}

/// Apply migrations when `RUN_MIGRATIONS=1`; production schemas are managed elsewhere.
async fn maybe_migrate(connector: &PgConnector) -> anyhow::Result<()> {
    if env::var("RUN_MIGRATIONS").map(|v| v == "1").unwrap_or(false) {
        let db = connector.connect().await?;
        migration::Migrator::up(&db, None).await?;
        connector.release(db).await?;
        info!("migrations applied");
    }
    Ok(())
}

pub fn build_app(cfg: &AppConfig) -> (Router, Arc<Dispatcher<PgConnector>>) {
    let credential = AdminCredential::new(cfg.admin.credential.clone());
    if !credential.is_configured() {
        warn!("no admin credential configured; admin operations will answer 403");
    }
    let dispatcher = Arc::new(Dispatcher::new(PgConnector::new(cfg.database.clone()), credential));
    (routes::build_router(Arc::clone(&dispatcher)), dispatcher)
}

/// Identity of this process in lifecycle logs.
#[derive(Debug, Clone, Copy)]
pub struct Instance {
    pub service_id: Uuid,
    pub pid: u32,
}

impl Instance {
    pub fn current() -> Self {
        Self { service_id: Uuid::new_v4(), pid: std::process::id() }
    }
}

fn log_shutdown(instance: Instance) {
    info!(
        service = SERVICE,
        event = "shutdown_signal",
        service_id = %instance.service_id,
        pid = instance.pid,
        "received Ctrl+C, shutting down"
    );
}

async fn shutdown_signal(instance: Instance) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    log_shutdown(instance);
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig, instance: Instance) -> anyhow::Result<()> {
    dotenv().ok();

    let (app, dispatcher) = build_app(&cfg);
    maybe_migrate(dispatcher.connector()).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting storefront api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(instance))
        .await?;
    Ok(())
}
