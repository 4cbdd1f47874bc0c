//! Startup and serving error types.

use thiserror::Error;

/// Errors that can stop the service before or while it serves requests.
///
/// The request handlers themselves never produce these; they only cover
/// configuration loading, logging setup and the HTTP listener.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to open log directory {dir}: {source}")]
    LogFile {
        dir: String,
        #[source]
        source: tracing_appender::rolling::InitError,
    },

    #[error("Failed to install log subscriber: {0}")]
    LogSubscriber(#[source] tracing_subscriber::util::TryInitError),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Failed to build tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
