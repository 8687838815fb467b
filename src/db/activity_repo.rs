// src/db/activity_repo.rs

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::activity::{ActivityFilter, ActivityLog, NewActivityLog},
};

/// Storage contract for the append-only audit trail. There is deliberately
/// no update or delete operation.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn append(&self, entry: &NewActivityLog) -> Result<ActivityLog, AppError>;
    async fn list(&self, filter: &ActivityFilter) -> Result<Vec<ActivityLog>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityStore for PgActivityRepository {
    async fn append(&self, entry: &NewActivityLog) -> Result<ActivityLog, AppError> {
        let row = sqlx::query_as::<_, ActivityLog>(
            r#"
            INSERT INTO activity_logs
                (action_type, entity_type, entity_id, entity_name, performed_by, details)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(entry.action_type)
        .bind(entry.entity_type)
        .bind(entry.entity_id)
        .bind(&entry.entity_name)
        .bind(&entry.performed_by)
        .bind(entry.details.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self, filter: &ActivityFilter) -> Result<Vec<ActivityLog>, AppError> {
        let rows = sqlx::query_as::<_, ActivityLog>(
            r#"
            SELECT * FROM activity_logs
            WHERE ($1::entity_type IS NULL OR entity_type = $1)
              AND ($2::action_type IS NULL OR action_type = $2)
              AND ($3::text IS NULL
                   OR entity_name ILIKE '%' || $3 || '%'
                   OR performed_by ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            LIMIT $4
            "#,
        )
        .bind(filter.entity_type)
        .bind(filter.action_type)
        .bind(filter.q.as_deref())
        .bind(filter.limit())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activity_logs")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
