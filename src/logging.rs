//! Logging setup: colored stderr plus a JSON rolling log file.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub const DEFAULT_LOG_FILE: &str = "logs/gradebook.log";

/// Installs the global subscriber.
///
/// The stderr layer honours `RUST_LOG` (default `info`) and the file layer
/// honours `RUST_LOG_JSON` (default `debug`). The file lives at
/// `LOG_FILE_PATH`, rotated daily. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file_appender = daily_file_appender(Path::new(&log_file_path))?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}

/// Daily rotating appender for `path`, creating the directory if needed.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn daily_file_appender(path: &Path) -> Result<RollingFileAppender> {
    let log_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = path
        .file_name()
        .unwrap_or(OsStr::new("gradebook.log"))
        .to_string_lossy();

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_file_name)
        .build(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    Ok(appender)
}
