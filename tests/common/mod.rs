#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use serde_json::Value;
use tower::ServiceExt;

use everyday_needs_api::config::{Config, Environment};
use everyday_needs_api::state::AppState;

/// Build the app router backed by an in-memory `SQLite` database with migrations
/// (including the seeded catalog) applied.
pub async fn test_app() -> Router {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();

    Migrator::up(&db, None).await.unwrap_or_default();

    let state = AppState {
        db,
        config: Config {
            database_url: String::new(),
            server_host: std::net::IpAddr::from([127, 0, 0, 1]),
            server_port: 0,
            environment: Environment::Development,
            log_level: "warn".to_string(),
            jwt_secret: "test-secret-key-for-testing-only-32chars".to_string(),
            jwt_expiration_secs: 900,
            frontend_url: "http://localhost:3001".to_string(),
        },
    };

    everyday_needs_api::routes::router().with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

fn json_request(method: &str, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .unwrap_or_default()
}

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

pub async fn get_with_auth(app: &Router, uri: &str, token: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, String) {
    send(app, json_request("POST", uri, body, None)).await
}

pub async fn post_json_with_auth(
    app: &Router,
    uri: &str,
    body: &Value,
    token: &str,
) -> (StatusCode, String) {
    send(app, json_request("POST", uri, body, Some(token))).await
}

pub async fn patch_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, String) {
    send(app, json_request("PATCH", uri, body, None)).await
}

pub async fn patch_json_with_auth(
    app: &Router,
    uri: &str,
    body: &Value,
    token: &str,
) -> (StatusCode, String) {
    send(app, json_request("PATCH", uri, body, Some(token))).await
}

pub fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

/// Log in (auto-provisioning on first use) and return `(user_id, token)`.
pub async fn login(app: &Router, email: &str) -> (i64, String) {
    let (status, body) = post_json(
        app,
        "/api/auth/login",
        &serde_json::json!({ "email": email, "password": "password" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    let json = parse(&body);
    let id = json["user"]["id"].as_i64().unwrap_or_default();
    let token = json["token"].as_str().unwrap_or_default().to_string();
    (id, token)
}

/// Submit the seller verification form for a user and return the new token.
pub async fn verify_seller(app: &Router, user_id: i64) -> String {
    let (status, body) = post_json(
        app,
        "/api/auth/kyc",
        &serde_json::json!({
            "userId": user_id,
            "kycData": {
                "businessName": "Green Acres",
                "cacNumber": "RC-123456",
                "address": "12 Farm Road, Ibadan",
                "category": "Farmer",
                "idType": "NIN"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "kyc failed: {body}");
    parse(&body)["token"].as_str().unwrap_or_default().to_string()
}

/// Switch a user's role and return `(status, body)`.
pub async fn switch_role(app: &Router, user_id: i64, role: &str) -> (StatusCode, String) {
    post_json(
        app,
        "/api/auth/switch-role",
        &serde_json::json!({ "userId": user_id, "role": role }),
    )
    .await
}
