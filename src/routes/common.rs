//! Common routes: service info, health, OpenAPI document and its `/docs` alias.

use crate::model::{HealthResponse, RootInfo};
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{extract::State, response::Redirect, routing::get, Json, Router};
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Static service description", body = RootInfo))
)]
pub async fn root() -> Json<RootInfo> {
    Json(RootInfo {
        message: "Backend is running",
        docs: "/docs",
        openapi: "/openapi.json",
        health: "/health",
    })
}

/// Always 200; `db` says whether a trivial query reached storage.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up; db reports storage reachability", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = match sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach database");
            false
        }
    };
    Json(HealthResponse { status: "ok", db: Some(db) })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// No interactive UI is bundled; `/docs` points clients at the machine-readable document.
async fn docs() -> Redirect {
    Redirect::temporary("/openapi.json")
}

/// GET /, GET /health, GET /openapi.json, GET /docs.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs))
        .with_state(state)
}
