use std::process::ExitCode;

use common::utils::logging::{init_logging, LogFormat};
use server::startup::{Instance, SERVICE};
use tracing::{error, info};

fn build_runtime(worker_threads: Option<usize>) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(n) = worker_threads {
        builder.worker_threads(n);
    }
    builder.build()
}

fn main() -> ExitCode {
    // .env before the subscriber so RUST_LOG / LOG_FORMAT from it apply
    dotenvy::dotenv().ok();
    init_logging(LogFormat::from_env());

    let instance = Instance::current();
    let (service_id, pid) = (instance.service_id, instance.pid);

    std::panic::set_hook(Box::new(move |panic| {
        error!(service = SERVICE, event = "panic", %service_id, pid, message = %panic, "unhandled panic");
    }));

    let cfg = match server::startup::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = %e, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };

    let threads = cfg.server.worker_threads;
    let rt = match build_runtime(threads) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %service_id,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = threads.unwrap_or_default(),
        admin_configured = cfg.admin.credential.is_some(),
        "storefront api starting"
    );

    if let Err(e) = rt.block_on(server::run(cfg, instance)) {
        error!(service = SERVICE, event = "run_failed", %service_id, error = %e, "server exited with error");
        return ExitCode::FAILURE;
    }
    info!(service = SERVICE, event = "stop", %service_id, pid, "storefront api stopped");
    ExitCode::SUCCESS
}
