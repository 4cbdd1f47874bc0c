//! Minimal API Bench
//!
//! Two stateless HTTP endpoints over two pure computations.
//!
//! # Modules
//!
//! - [`synth`] - Deterministic synthetic user generator (`GET /users`)
//! - [`benchmark`] - Trial-division prime benchmark (`GET /benchmark`)
//! - [`models`] - Response records
//! - [`gateway`] - axum router, handlers and OpenAPI document
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - Startup/serving errors

pub mod benchmark;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod synth;

/// Short git hash of the build (`unknown` outside a checkout)
pub const BUILD_VERSION: &str = env!("GIT_HASH");

// Convenient re-exports at crate root
pub use config::{AppConfig, GatewayConfig};
pub use error::AppError;
pub use models::{Address, BenchmarkResult, Company, User, UserPreferences};
pub use synth::{USER_COUNT, generate_users};
