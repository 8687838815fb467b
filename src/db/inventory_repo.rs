// src/db/inventory_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::inventory::{InventoryFilter, InventoryItem, NewInventoryItem},
};

/// Storage contract for relief-supply items.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<InventoryItem>, AppError>;
    async fn insert(&self, fields: &NewInventoryItem) -> Result<InventoryItem, AppError>;
    async fn update(
        &self,
        id: Uuid,
        fields: &NewInventoryItem,
    ) -> Result<Option<InventoryItem>, AppError>;
    /// Returns the removed row, if any.
    async fn delete(&self, id: Uuid) -> Result<Option<InventoryItem>, AppError>;
    /// Subtract `amount` in a single guarded statement. Quantity can never
    /// go below zero, concurrent callers included.
    async fn decrement(&self, id: Uuid, amount: i32) -> Result<InventoryItem, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    /// Items strictly below their threshold, lowest quantity first.
    async fn low_stock(&self) -> Result<Vec<InventoryItem>, AppError>;
}

#[derive(Clone)]
pub struct PgInventoryRepository {
    pool: PgPool,
}

impl PgInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for PgInventoryRepository {
    async fn list(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>, AppError> {
        let items = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT * FROM inventory
            WHERE ($1::item_category IS NULL OR category = $1)
              AND ($2::text IS NULL OR item_name ILIKE '%' || $2 || '%')
            ORDER BY item_name ASC
            "#,
        )
        .bind(filter.category)
        .bind(filter.q.as_deref())
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn get(&self, id: Uuid) -> Result<Option<InventoryItem>, AppError> {
        let item = sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn insert(&self, fields: &NewInventoryItem) -> Result<InventoryItem, AppError> {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            INSERT INTO inventory (item_name, category, quantity, unit, low_stock_threshold)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&fields.item_name)
        .bind(fields.category)
        .bind(fields.quantity)
        .bind(&fields.unit)
        .bind(fields.low_stock_threshold)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: &NewInventoryItem,
    ) -> Result<Option<InventoryItem>, AppError> {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            UPDATE inventory
            SET item_name = $2,
                category = $3,
                quantity = $4,
                unit = $5,
                low_stock_threshold = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.item_name)
        .bind(fields.category)
        .bind(fields.quantity)
        .bind(&fields.unit)
        .bind(fields.low_stock_threshold)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<InventoryItem>, AppError> {
        let item =
            sqlx::query_as::<_, InventoryItem>("DELETE FROM inventory WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(item)
    }

    async fn decrement(&self, id: Uuid, amount: i32) -> Result<InventoryItem, AppError> {
        // The WHERE clause is the invariant: no row is touched unless the
        // remaining quantity covers the amount.
        let updated = sqlx::query_as::<_, InventoryItem>(
            r#"
            UPDATE inventory
            SET quantity = quantity - $2, updated_at = now()
            WHERE id = $1 AND quantity >= $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(amount)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(item) => Ok(item),
            None => match self.get(id).await? {
                Some(item) => Err(AppError::InsufficientStock {
                    requested: amount,
                    available: item.quantity,
                }),
                None => Err(AppError::NotFound("inventory item")),
            },
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn low_stock(&self) -> Result<Vec<InventoryItem>, AppError> {
        let items = sqlx::query_as::<_, InventoryItem>(
            "SELECT * FROM inventory WHERE quantity < low_stock_threshold ORDER BY quantity ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}
