//! Item CRUD routes.

use crate::handlers::items::{create_item, delete_item, get_item, list_items};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:item_id", get(get_item).delete(delete_item))
        .with_state(state)
}
