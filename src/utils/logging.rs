//! File-backed tracing setup
//!
//! The full-screen wizard owns the terminal, so log output goes to a file
//! instead of stderr. `RUST_LOG` controls the filter (default `info`).

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log file name inside the log directory
pub const LOG_FILE: &str = "veo-prompt.log";

/// Default log directory: `<data-local-dir>/veo-prompt/logs`, or `./logs`
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("veo-prompt").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Install the global subscriber writing to `dir/veo-prompt.log`.
///
/// Best-effort: returns `None` without installing anything when the
/// directory cannot be created. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init_logging(dir: Option<&Path>) -> Option<WorkerGuard> {
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    // try_init: a subscriber may already be installed (tests)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(guard)
}
