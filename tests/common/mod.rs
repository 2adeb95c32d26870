#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use item_service::config::DEFAULT_MAX_BODY_BYTES;
use item_service::{build_router, open_in_memory, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub async fn test_app() -> (Router, SqlitePool) {
    let pool = open_in_memory().await.unwrap();
    let app = build_router(AppState { pool: pool.clone() }, DEFAULT_MAX_BODY_BYTES);
    (app, pool)
}

pub async fn send_with_headers(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_with_headers(app, request).await;
    (status, body)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_raw(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub async fn create(app: &Router, name: &str) -> Value {
    let (status, body) = send(app, Method::POST, "/items", Some(serde_json::json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body
}
