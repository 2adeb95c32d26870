//! Item CRUD against SQLite.

use crate::error::AppError;
use crate::model::Item;
use sqlx::SqlitePool;

const INSERT_ITEM: &str = "INSERT INTO items (name) VALUES (?) RETURNING id, name";
const SELECT_ALL: &str = "SELECT id, name FROM items ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name FROM items WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM items WHERE id = ?";

pub struct ItemService;

impl ItemService {
    /// Insert one row and return it with its assigned id.
    pub async fn insert(pool: &SqlitePool, name: &str) -> Result<Item, AppError> {
        tracing::debug!(sql = %INSERT_ITEM, "query (tx)");
        let mut tx = pool.begin().await?;
        let item: Item = sqlx::query_as(INSERT_ITEM)
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id = item.id, "item created");
        Ok(item)
    }

    /// All rows, ascending id.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Item>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows: Vec<Item> = sqlx::query_as(SELECT_ALL).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Item>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row: Option<Item> = sqlx::query_as(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete one row by id. Returns false, with nothing written, when no row matched.
    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE_BY_ID, id, "query (tx)");
        let mut tx = pool.begin().await?;
        let result = sqlx::query(DELETE_BY_ID).bind(id).execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }
        tx.commit().await?;
        tracing::info!(id, "item deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::open_in_memory;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let pool = open_in_memory().await.unwrap();
        let a = ItemService::insert(&pool, "a").await.unwrap();
        let b = ItemService::insert(&pool, "b").await.unwrap();
        assert_eq!(a.name, "a");
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let pool = open_in_memory().await.unwrap();
        assert!(ItemService::list_all(&pool).await.unwrap().is_empty());
        for name in ["c", "a", "b"] {
            ItemService::insert(&pool, name).await.unwrap();
        }
        let rows = ItemService::list_all(&pool).await.unwrap();
        let names: Vec<&str> = rows.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let pool = open_in_memory().await.unwrap();
        assert_eq!(ItemService::get_by_id(&pool, 99999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went_away() {
        let pool = open_in_memory().await.unwrap();
        let item = ItemService::insert(&pool, "gone").await.unwrap();
        let keep = ItemService::insert(&pool, "kept").await.unwrap();

        assert!(ItemService::delete_by_id(&pool, item.id).await.unwrap());
        assert!(!ItemService::delete_by_id(&pool, item.id).await.unwrap());
        assert_eq!(ItemService::get_by_id(&pool, item.id).await.unwrap(), None);
        assert_eq!(ItemService::list_all(&pool).await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn closed_pool_surfaces_db_error() {
        let pool = open_in_memory().await.unwrap();
        pool.close().await;
        let err = ItemService::insert(&pool, "x").await.unwrap_err();
        assert!(matches!(err, AppError::Db(_)));
    }
}
