//! HTTP gateway
//!
//! Thin axum layer over [`crate::synth`] and [`crate::benchmark`]. There is
//! no shared state: every request rebuilds its response from scratch.

pub mod handlers;
pub mod openapi;
pub mod types;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::error::AppError;

/// Build the complete router (API routes + Swagger UI)
pub fn build_router() -> Router {
    Router::new()
        .route("/users", get(handlers::get_users))
        .route("/benchmark", get(handlers::run_benchmark))
        .route("/health", get(handlers::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind the configured address and serve until Ctrl-C
pub async fn run_server(config: &GatewayConfig) -> Result<(), AppError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), AppError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr().map_err(AppError::Serve)?;

    tracing::info!("Gateway listening on http://{}", local);
    tracing::info!("API Docs: http://{}/docs", local);
    tracing::info!("Endpoints: GET /users, GET /benchmark, GET /health");

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler, keep serving until the process is killed
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
