//! OpenAPI document served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail, ValidationIssue};
use crate::handlers::items;
use crate::model::{DeletedItem, HealthResponse, Item, ItemCreate, RootInfo};
use crate::routes::common;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Backend", description = "Item CRUD over an embedded SQLite file"),
    paths(
        common::root,
        common::health,
        items::create_item,
        items::list_items,
        items::get_item,
        items::delete_item
    ),
    components(schemas(
        Item,
        ItemCreate,
        DeletedItem,
        HealthResponse,
        RootInfo,
        ErrorBody,
        ErrorDetail,
        ValidationIssue
    )),
    tags(
        (name = "root"),
        (name = "health"),
        (name = "items")
    )
)]
pub struct ApiDoc;
