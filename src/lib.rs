//! Item service: CRUD REST backend for id/name items in an embedded SQLite file.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError, ValidationIssue};
pub use model::{DeletedItem, HealthResponse, Item, ItemCreate};
pub use openapi::ApiDoc;
pub use routes::{build_router, common_routes, item_routes};
pub use service::ItemService;
pub use state::AppState;
pub use store::{connect, ensure_items_table, open_in_memory};
