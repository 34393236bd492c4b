//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "SENTIFEEL_LOG";

const LOG_FILE_NAME: &str = "sentifeel.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/sentifeel/logs/` (the terminal belongs
/// to the UI, so nothing is ever written to stdout/stderr).
/// Log level is controlled by the `SENTIFEEL_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SENTIFEEL_LOG=debug cargo run
/// SENTIFEEL_LOG=sentifeel_scorer=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via SENTIFEEL_LOG
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("SentiFeel starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `SENTIFEEL_LOG` is unset or invalid
pub fn default_filter() -> &'static str {
    "sentifeel=info,sentifeel_app=info,sentifeel_scorer=info,sentifeel_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("sentifeel").join("logs"))
}
