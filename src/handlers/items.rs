//! Item handlers: create, list, read, delete.

use crate::error::{AppError, ErrorBody, ValidationIssue};
use crate::extractors::ValidJson;
use crate::model::{DeletedItem, Item, ItemCreate};
use crate::service::ItemService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// Path ids arrive as strings so a non-integer segment maps to 422 rather than axum's 400.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| {
        AppError::Validation(vec![ValidationIssue::new(
            ["path", "item_id"],
            "Input should be a valid integer",
            "int_parsing",
        )])
    })
}

#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = ItemCreate,
    responses(
        (status = 200, description = "Created item with its assigned id", body = Item),
        (status = 422, description = "Body missing or malformed", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ItemCreate>,
) -> Result<Json<Item>, AppError> {
    let item = ItemService::insert(&state.pool, &payload.name).await?;
    Ok(Json(item))
}

#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All items, ascending id", body = Vec<Item>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = ItemService::list_all(&state.pool).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(("item_id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "No item with that id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Item>, AppError> {
    let id = parse_id(&id_str)?;
    let item = ItemService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    tag = "items",
    params(("item_id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item removed", body = DeletedItem),
        (status = 404, description = "No item with that id", body = ErrorBody),
        (status = 422, description = "Id is not an integer", body = ErrorBody)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<DeletedItem>, AppError> {
    let id = parse_id(&id_str)?;
    if !ItemService::delete_by_id(&state.pool, id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(DeletedItem { deleted: true, id }))
}
