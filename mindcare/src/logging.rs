//! File logging for mindcare.
//!
//! The terminal belongs to the UI, so `tracing` output goes to
//! `mindcare.log` in the config directory instead of stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,mindcare=debug,mindcare_core=debug";

/// Installs the global subscriber writing to `dir/mindcare.log`.
///
/// `RUST_LOG` overrides the default filter. The returned guard flushes the
/// background writer on drop and must live until the program exits.
///
/// # Errors
///
/// Returns `Err` if `dir` cannot be created.
pub fn init_logging(dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, "mindcare.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    if let Err(e) = installed {
        eprintln!("mindcare: logging already initialised: {e}");
    }
    Ok(guard)
}
