//! Synthetic user list handler

use std::time::Instant;

use axum::Json;

use super::super::types::{ApiError, internal_error};
use crate::models::User;
use crate::synth;

/// Get synthetic users
///
/// Returns exactly 10,000 deterministic user records, ids 1..=10000 in
/// ascending order. Identical on every call.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All synthetic users", body = Vec<User>, content_type = "application/json"),
        (status = 500, description = "Generation task failed")
    ),
    tag = "Demo"
)]
pub async fn get_users() -> Result<Json<Vec<User>>, ApiError> {
    let start = Instant::now();

    let users = tokio::task::spawn_blocking(synth::generate_users)
        .await
        .map_err(|e| {
            tracing::error!("[USERS] generation task failed: {}", e);
            internal_error("user generation failed")
        })?;

    tracing::debug!(
        count = users.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "[USERS] generated"
    );

    Ok(Json(users))
}
