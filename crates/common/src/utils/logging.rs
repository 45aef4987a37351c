use std::io;
use configs::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sqlx=warn";

fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)))
}

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info,sqlx=warn`
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter(None))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
pub fn init_logging_json(filter: Option<&str>) {
    let _ = fmt()
        .with_env_filter(env_filter(filter))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the formatter from `[logging]`. Calling it twice is harmless: the
/// second `try_init` is ignored.
pub fn init_logging(cfg: &LoggingConfig) {
    match cfg.format {
        LogFormat::Json => init_logging_json(cfg.filter.as_deref()),
        LogFormat::Compact => {
            let _ = fmt()
                .with_env_filter(env_filter(cfg.filter.as_deref()))
                .with_target(false)
                .compact()
                .with_writer(io::stdout)
                .try_init();
        }
    }
}
