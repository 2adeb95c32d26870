mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::{get, send_with_headers, test_app};
use serde_json::json;

#[tokio::test]
async fn root_describes_the_service() {
    let (app, _pool) = test_app().await;
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Backend is running",
            "docs": "/docs",
            "openapi": "/openapi.json",
            "health": "/health"
        })
    );
}

#[tokio::test]
async fn health_reports_reachable_db() {
    let (app, _pool) = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "db": true }));
}

#[tokio::test]
async fn health_stays_200_when_db_is_gone() {
    let (app, pool) = test_app().await;
    pool.close().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "db": false }));
}

#[tokio::test]
async fn openapi_document_lists_item_routes() {
    let (app, _pool) = test_app().await;
    let (status, body) = get(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    let paths = body["paths"].as_object().unwrap();
    for path in ["/", "/health", "/items", "/items/{item_id}"] {
        assert!(paths.contains_key(path), "missing path {path}");
    }
    assert!(paths["/items"]["post"].is_object());
    assert!(paths["/items/{item_id}"]["delete"].is_object());
    assert!(body["components"]["schemas"]["Item"].is_object());
}

#[tokio::test]
async fn docs_link_from_root_resolves_to_openapi_document() {
    let (app, _pool) = test_app().await;
    let (_, root) = get(&app, "/").await;
    let docs = root["docs"].as_str().unwrap();

    let request = Request::builder().uri(docs).body(Body::empty()).unwrap();
    let (status, headers, _) = send_with_headers(&app, request).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers[header::LOCATION], "/openapi.json");
}
