//! HTTP handlers
//!
//! - [`users`] - `GET /users`
//! - [`benchmark`] - `GET /benchmark`
//! - [`health`] - `GET /health`

pub mod benchmark;
pub mod health;
pub mod users;

pub use benchmark::run_benchmark;
pub use health::{HealthResponse, health_check};
pub use users::get_users;

