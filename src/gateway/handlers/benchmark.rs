//! Prime benchmark handler

use axum::Json;

use super::super::types::{ApiError, internal_error};
use crate::benchmark;
use crate::models::BenchmarkResult;

/// Run the CPU benchmark
///
/// Counts primes below 1,000,000 by trial division and reports the elapsed
/// time, the prime count (always 78498), the process id and its resident
/// memory in MB. Each call repeats the full computation.
#[utoipa::path(
    get,
    path = "/benchmark",
    responses(
        (status = 200, description = "Benchmark finished", body = BenchmarkResult, content_type = "application/json"),
        (status = 500, description = "Benchmark task failed")
    ),
    tag = "Demo"
)]
pub async fn run_benchmark() -> Result<Json<BenchmarkResult>, ApiError> {
    // CPU-bound: keep it off the async workers
    let result = tokio::task::spawn_blocking(benchmark::run)
        .await
        .map_err(|e| {
            tracing::error!("[BENCH] benchmark task failed: {}", e);
            internal_error("benchmark failed")
        })?;

    Ok(Json(result))
}
