//! Logging initialization.
//!
//! Logs always go to a file under the config directory; mirroring to
//! stdout is the caller's choice (the CLI enables it when output is
//! piped, e.g. under a supervisor). The log file is truncated at every
//! session start so it only ever describes the current run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the background log writer alive.
///
/// Dropping the guard flushes and stops file logging; hold it for the
/// lifetime of the process.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging for this session.
///
/// `debug_mode` raises the default filter from `info` to `debug`; the
/// `RUST_LOG` environment variable overrides both.
pub fn init_logging_full(
    log_dir: &str,
    log_file: &str,
    stdout_enabled: bool,
    debug_mode: bool,
) -> Result<LoggingGuard, io::Error> {
    prepare_log_file(log_dir, log_file)?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    let default_directive = if debug_mode { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if stdout_enabled {
        let stdout_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .with_span_events(FmtSpan::CLOSE)
            .pretty();
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the log directory and truncate the session log file.
fn prepare_log_file(log_dir: &str, log_file: &str) -> Result<PathBuf, io::Error> {
    fs::create_dir_all(log_dir)?;
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;
    Ok(log_path)
}
