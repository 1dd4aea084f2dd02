//! Reception Desk - Main Entry Point

use reception_desk::app::run_app;
use reception_desk::constants::LOG_FILE_PREFIX;
use reception_desk::helpers::get_or_create_log_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, fmt::time::LocalTime, prelude::*};

/// Console logging plus a daily rolling file; the guard must outlive the app
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_timer(LocalTime::rfc_3339());

    match get_or_create_log_dir() {
        Ok(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_timer(LocalTime::rfc_3339())
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(filter).with(console).init();
            tracing::warn!(error = %e, "Log directory unavailable, logging to stdout only");
            None
        }
    }
}

fn main() {
    let _guard = init_logging();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Reception Desk...");

    run_app();
}
