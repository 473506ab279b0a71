use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_FILTER: &str = "analyzer_core=info,analyzer_tui=info";

/// Directory for the rolling log files.
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("content-analyzer").join("logs"))
}

/// Route tracing output to a daily log file. The terminal is owned by the
/// UI, so nothing is written to stdout or stderr.
///
/// Returns `None` (logging disabled) when no cache directory is available.
/// The guard must live until exit or buffered lines are lost.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("warning: cannot create log directory {}: {e}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::daily(&dir, "tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init();

    match installed {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}
