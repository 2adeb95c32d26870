//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Handed to every handler through axum `State`. The pool is created once in
/// `main` and closed once at shutdown; clones share it.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
