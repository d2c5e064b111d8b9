//! Shared helpers for HTTP-level tests

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use musicat_api::{build_router, AppState};
use musicat_common::db::{init_memory_database, seed_demo_catalog};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot`

pub const TEST_SECRET: &str = "test-secret";

/// Router over a fresh in-memory catalog with the demo data loaded
pub async fn seeded_app() -> Router {
    seeded_app_with_pool().await.0
}

/// Same as [`seeded_app`], keeping a handle on the database
pub async fn seeded_app_with_pool() -> (Router, SqlitePool) {
    let pool = init_memory_database().await.expect("Should open memory database");
    seed_demo_catalog(&pool).await.expect("Should seed demo catalog");
    (build_router(AppState::new(pool.clone(), TEST_SECRET)), pool)
}

/// Send a request, returning status and parsed JSON body (`Null` if empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    };
    (status, value)
}

/// Register a throwaway account and return its token
pub async fn register(app: &Router, username: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "long enough",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
    body["token"].as_str().expect("token in response").to_string()
}
