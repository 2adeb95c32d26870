//! Item record and the JSON shapes that cross the HTTP boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted item. `id` is assigned by storage on insert and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /items`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ItemCreate {
    /// At most 200 characters.
    pub name: String,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct DeletedItem {
    pub deleted: bool,
    pub id: i64,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<bool>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RootInfo {
    pub message: &'static str,
    pub docs: &'static str,
    pub openapi: &'static str,
    pub health: &'static str,
}
