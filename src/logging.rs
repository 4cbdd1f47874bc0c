//! Tracing subscriber setup
//!
//! Text mode logs to stdout and to a rolling file; JSON mode writes only the
//! file. A log directory that cannot be created is a startup error, not a
//! panic.

use crate::config::AppConfig;
use crate::error::AppError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map the `rotation` config value; anything unknown means a single file
pub fn rotation_for(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}

/// Open `log_dir/log_file*`, creating `log_dir` if needed
pub fn build_file_appender(config: &AppConfig) -> Result<RollingFileAppender, AppError> {
    RollingFileAppender::builder()
        .rotation(rotation_for(&config.rotation))
        .filename_prefix(config.log_file.as_str())
        .build(&config.log_dir)
        .map_err(|source| AppError::LogFile {
            dir: config.log_dir.clone(),
            source,
        })
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard, AppError> {
    let (non_blocking, guard) = tracing_appender::non_blocking(build_file_appender(config)?);

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).try_init()
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).try_init()
    };
    installed.map_err(AppError::LogSubscriber)?;

    Ok(guard)
}
