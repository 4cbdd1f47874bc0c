//! End-to-end checks against a live router on an ephemeral port.

use std::net::SocketAddr;

use minimal_api_bench::gateway;
use minimal_api_bench::{BenchmarkResult, USER_COUNT, User};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Running server; dropping it triggers graceful shutdown
struct TestServer {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            gateway::serve(listener, async {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });
        Self {
            addr,
            _shutdown: tx,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

#[tokio::test]
async fn users_endpoint_returns_full_ordered_list() {
    let server = TestServer::start().await;

    let resp = reqwest::get(server.url("/users")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));

    let users: Vec<User> = resp.json().await.unwrap();
    assert_eq!(users.len(), USER_COUNT);
    assert!(
        users
            .iter()
            .enumerate()
            .all(|(pos, u)| u.id as usize == pos + 1)
    );

    let first = &users[0];
    assert_eq!(first.first_name, "Linda");
    assert_eq!(first.last_name, "Lopez");
    assert_eq!(first.email, "linda.lopez1@example.com");
    assert_eq!(first.tags.len(), 4);
    assert!(!users[9].is_active);
}

#[tokio::test]
async fn users_endpoint_is_byte_identical_across_calls() {
    let server = TestServer::start().await;

    let a = reqwest::get(server.url("/users")).await.unwrap().bytes().await.unwrap();
    let b = reqwest::get(server.url("/users")).await.unwrap().bytes().await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn users_wire_format() {
    let server = TestServer::start().await;

    let body = reqwest::get(server.url("/users"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let first = &json[0];
    assert_eq!(first["Id"], 1);
    assert_eq!(first["Address"]["Country"], "USA");
    assert_eq!(first["Company"]["Salary"].as_i64(), Some(40001));
    assert!(body.contains("\"Salary\":40001,"));
    assert_eq!(first["CreatedAt"], "2020-01-02T00:00:00");
    assert_eq!(first["Metadata"]["LastLogin"], "2020-01-02T00:00:00.0000000");

    // metadata keys keep insertion order on the wire
    let last_login = body.find("\"LastLogin\"").unwrap();
    let status = body.find("\"AccountStatus\"").unwrap();
    let since = body.find("\"CustomerSince\"").unwrap();
    assert!(last_login < status && status < since);
}

#[tokio::test]
async fn benchmark_endpoint_counts_primes() {
    let server = TestServer::start().await;

    let resp = reqwest::get(server.url("/benchmark")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["PrimesFound"], 78498);
    assert!(json["ExecutionTimeMs"].as_i64().unwrap() >= 0);
    assert!(json["WorkingSetMB"].is_number());

    let result: BenchmarkResult = serde_json::from_value(json).unwrap();
    assert_eq!(result.process_id, std::process::id());
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = TestServer::start().await;

    let json: serde_json::Value = reqwest::get(server.url("/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["code"], 0);
    assert_eq!(json["msg"], "ok");
    assert!(json["data"]["timestamp_ms"].as_u64().unwrap() > 0);
    assert!(!json["data"]["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = TestServer::start().await;

    let json: serde_json::Value = reqwest::get(server.url("/api-docs/openapi.json"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(json["paths"]["/users"]["get"].is_object());
    assert!(json["paths"]["/benchmark"]["get"].is_object());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = TestServer::start().await;

    let resp = reqwest::get(server.url("/orders")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
