use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use gradebook_api::config::cors::CorsConfig;
use gradebook_api::config::jwt::JwtConfig;
use gradebook_api::router::init_router;
use gradebook_api::state::AppState;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn setup_test_app(pool: SqlitePool) -> Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

pub fn unique_username() -> String {
    format!("testuser-{}", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn auth_json_request(method: &str, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn auth_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<axum::body::Body> {
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn response_json(response: Response<axum::body::Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[allow(dead_code)]
pub async fn response_text(response: Response<axum::body::Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Registers a fresh user and returns a valid bearer token for it.
#[allow(dead_code)]
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });

    let response = send(app, json_request("POST", "/auth/register", &body)).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let response = send(app, json_request("POST", "/auth/login", &body)).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let body = response_json(response).await;
    body["token"].as_str().unwrap().to_string()
}
