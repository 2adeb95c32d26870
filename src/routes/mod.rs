//! Router assembly.

pub mod common;
pub mod items;

pub use common::common_routes;
pub use items::item_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Full application: common and item routes behind request tracing.
/// The body limit is enforced by the JSON extractor, so oversized bodies get the
/// same JSON 413 whether or not they carry a `Content-Length`.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(item_routes(state))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
