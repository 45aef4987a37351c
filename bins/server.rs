use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn load_config() -> (configs::AppConfig, Option<String>) {
    // .env first so that RUST_LOG / DATABASE_URL are visible
    dotenv().ok();
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg, None),
        Err(file_err) => match configs::AppConfig::from_env() {
            Ok(cfg) => (cfg, Some(file_err.to_string())),
            Err(env_err) => {
                common::utils::logging::init_logging_default();
                error!(service = "server", event = "config_invalid", error = %env_err, "configuration rejected");
                std::process::exit(2);
            }
        },
    }
}

fn main() -> std::process::ExitCode {
    let (cfg, file_err) = load_config();
    common::utils::logging::init_logging(&cfg.logging);
    info!(service = "server", event = "logger_init", "tracing subscriber initialized");
    if let Some(e) = file_err {
        warn!(service = "server", event = "config_file_skipped", error = %e, "no usable config file, using defaults and environment");
    }

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic hook: route panics through tracing
    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "server",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        in_memory = !cfg.database.is_configured(),
        "beer service starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
