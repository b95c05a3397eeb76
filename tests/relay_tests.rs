//! Relay flow tests against a live in-process backend.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sitedraft::clients::backend::BackendClient;
use sitedraft::config::{Config, Environment};
use sitedraft::relay::RelayState;
use sitedraft::services::GenerationService;
use std::sync::Arc;
use tower::ServiceExt;

async fn spawn_backend() -> (std::net::SocketAddr, Arc<sitedraft::api::AppState>) {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = sitedraft::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");
    let app = sitedraft::api::router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind backend listener");
    let addr = listener.local_addr().expect("missing local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("backend serve failed");
    });

    (addr, state)
}

fn relay_app(backend_url: String, environment: Environment) -> Router {
    let client = sitedraft::state::build_shared_http_client(5).expect("failed to build client");
    let state = RelayState::new(BackendClient::new(backend_url, client), environment);
    sitedraft::relay::router(Arc::new(state))
}

/// Grabs a free port and releases it so connections to it are refused.
async fn unreachable_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().expect("missing local addr");
    drop(listener);

    format!("http://{addr}")
}

fn post_generate(prompt: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-sections")
        .header("Content-Type", "application/json")
        .body(Body::from(prompt.to_string()))
        .unwrap()
}

#[tokio::test]
async fn relay_forwards_generation_to_backend() {
    let (addr, backend_state) = spawn_backend().await;
    let app = relay_app(format!("http://{addr}"), Environment::Development);

    let response = app
        .clone()
        .oneshot(post_generate(serde_json::json!({
            "prompt": "I want a bakery website"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body_json["sections"][0]["content"], "Welcome to our bakery!");

    // The request really reached the backend and was persisted there
    let count = backend_state
        .generation_service()
        .count_generations()
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn relay_validates_prompt_before_forwarding() {
    // An unreachable upstream in production mode would turn any forwarded
    // request into a 500, so a 400 here proves validation happened locally
    let app = relay_app(unreachable_backend_url().await, Environment::Production);

    let response = app
        .clone()
        .oneshot(post_generate(serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["error"], "Prompt is required and must be a string");

    let response = app
        .clone()
        .oneshot(post_generate(serde_json::json!({ "prompt": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn development_fallback_synthesizes_sections() {
    let app = relay_app(unreachable_backend_url().await, Environment::Development);

    let response = app
        .clone()
        .oneshot(post_generate(serde_json::json!({
            "prompt": "I want a bakery website"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let sections = body_json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0]["content"], "Welcome to our bakery!");
    assert_eq!(
        sections[2]["content"],
        "Find us in Cairo or contact us for more information."
    );
}

#[tokio::test]
async fn production_failure_stays_visible() {
    let app = relay_app(unreachable_backend_url().await, Environment::Production);

    let response = app
        .clone()
        .oneshot(post_generate(serde_json::json!({
            "prompt": "I want a bakery website"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body_json["error"], "Failed to generate sections");
    assert!(body_json["details"].is_string());
}

#[tokio::test]
async fn fallback_covers_only_the_generate_route() {
    let app = relay_app(unreachable_backend_url().await, Environment::Development);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/generate-sections")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["error"], "Failed to fetch sections");
}

#[tokio::test]
async fn relay_lists_backend_records() {
    let (addr, _) = spawn_backend().await;
    let app = relay_app(format!("http://{addr}"), Environment::Development);

    app.clone()
        .oneshot(post_generate(serde_json::json!({
            "prompt": "a dining spot"
        })))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/generate-sections")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let records: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["prompt"], "a dining spot");
}

#[tokio::test]
async fn relay_passes_backend_404_through() {
    let (addr, _) = spawn_backend().await;
    let app = relay_app(format!("http://{addr}"), Environment::Development);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/generate-sections/no-such-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["error"], "Section not found");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/generate-sections/no-such-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn relay_deletes_through_backend() {
    let (addr, backend_state) = spawn_backend().await;
    let app = relay_app(format!("http://{addr}"), Environment::Development);

    app.clone()
        .oneshot(post_generate(serde_json::json!({
            "prompt": "a cake shop"
        })))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/generate-sections")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let records: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let id = records[0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/generate-sections/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["message"], "Section deleted successfully");

    let count = backend_state
        .generation_service()
        .count_generations()
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn relay_health_reports_backend_reachability() {
    let (addr, _) = spawn_backend().await;
    let app = relay_app(format!("http://{addr}"), Environment::Development);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["status"], "ok");
    assert_eq!(body_json["backend"], "ok");

    let app = relay_app(unreachable_backend_url().await, Environment::Development);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["status"], "ok");
    assert_eq!(body_json["backend"], "unreachable");
}
