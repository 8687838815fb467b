// src/db/distribution_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::distribution::{Distribution, DistributionFilter, DistributionRecord, NewDistribution},
};

/// Storage contract for the distribution ledger.
#[async_trait]
pub trait DistributionStore: Send + Sync {
    /// Joined read: each distribution together with the household and item
    /// fields it references, newest first.
    async fn list(&self, filter: &DistributionFilter) -> Result<Vec<DistributionRecord>, AppError>;
    async fn insert(&self, fields: &NewDistribution) -> Result<Distribution, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[derive(Clone)]
pub struct PgDistributionRepository {
    pool: PgPool,
}

impl PgDistributionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DistributionStore for PgDistributionRepository {
    async fn list(&self, filter: &DistributionFilter) -> Result<Vec<DistributionRecord>, AppError> {
        let records = sqlx::query_as::<_, DistributionRecord>(
            r#"
            SELECT d.id, d.household_id, d.inventory_id, d.quantity_distributed,
                   d.distributed_by, d.distributed_at, d.notes,
                   h.household_number, h.head_of_family, h.purok,
                   i.item_name, i.unit, i.category
            FROM distributions d
            JOIN households h ON h.id = d.household_id
            JOIN inventory i ON i.id = d.inventory_id
            WHERE ($1::purok IS NULL OR h.purok = $1)
              AND ($2::text IS NULL
                   OR h.household_number ILIKE '%' || $2 || '%'
                   OR h.head_of_family ILIKE '%' || $2 || '%'
                   OR i.item_name ILIKE '%' || $2 || '%')
            ORDER BY d.distributed_at DESC
            "#,
        )
        .bind(filter.purok)
        .bind(filter.q.as_deref())
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn insert(&self, fields: &NewDistribution) -> Result<Distribution, AppError> {
        let distribution = sqlx::query_as::<_, Distribution>(
            r#"
            INSERT INTO distributions
                (household_id, inventory_id, quantity_distributed, distributed_by, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(fields.household_id)
        .bind(fields.inventory_id)
        .bind(fields.quantity_distributed)
        .bind(&fields.distributed_by)
        .bind(fields.notes.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(distribution)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM distributions")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
