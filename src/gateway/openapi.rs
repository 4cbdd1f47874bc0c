//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:5003/docs`
//! - OpenAPI JSON: `http://localhost:5003/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::models::{Address, BenchmarkResult, Company, User, UserPreferences};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Minimal API Bench",
        version = "1.0.0",
        description = "Deterministic synthetic user list and a trial-division CPU benchmark.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5003", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::users::get_users,
        crate::gateway::handlers::benchmark::run_benchmark,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            User,
            Address,
            Company,
            UserPreferences,
            BenchmarkResult,
            HealthResponse,
        )
    ),
    tags(
        (name = "Demo", description = "Synthetic data and CPU benchmark"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Minimal API Bench");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths.paths;
        assert!(paths.contains_key("/users"));
        assert!(paths.contains_key("/benchmark"));
        assert!(paths.contains_key("/health"));
    }

    #[test]
    fn test_schemas_use_wire_names() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("\"BenchmarkResult\""));
        assert!(json.contains("\"WorkingSetMB\""));
        assert!(json.contains("\"FirstName\""));
        assert!(json.contains("\"TwoFactorEnabled\""));
    }
}
