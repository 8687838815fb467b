// src/db/household_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::household::{Household, HouseholdFilter, NewHousehold},
};

/// Storage contract for the household registry.
#[async_trait]
pub trait HouseholdStore: Send + Sync {
    async fn list(&self, filter: &HouseholdFilter) -> Result<Vec<Household>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<Household>, AppError>;
    /// Fails with `DuplicateHouseholdNumber` when the number is taken.
    async fn insert(&self, fields: &NewHousehold) -> Result<Household, AppError>;
    /// Same duplicate rule, excluding the row being edited.
    async fn update(&self, id: Uuid, fields: &NewHousehold) -> Result<Option<Household>, AppError>;
    /// Returns the removed row, if any. Distributions of the household are
    /// removed with it.
    async fn delete(&self, id: Uuid) -> Result<Option<Household>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[derive(Clone)]
pub struct PgHouseholdRepository {
    pool: PgPool,
}

impl PgHouseholdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HouseholdStore for PgHouseholdRepository {
    async fn list(&self, filter: &HouseholdFilter) -> Result<Vec<Household>, AppError> {
        let households = sqlx::query_as::<_, Household>(
            r#"
            SELECT * FROM households
            WHERE ($1::purok IS NULL OR purok = $1)
              AND ($2::text IS NULL
                   OR household_number ILIKE '%' || $2 || '%'
                   OR head_of_family ILIKE '%' || $2 || '%'
                   OR address ILIKE '%' || $2 || '%')
            ORDER BY household_number ASC
            "#,
        )
        .bind(filter.purok)
        .bind(filter.q.as_deref())
        .fetch_all(&self.pool)
        .await?;
        Ok(households)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Household>, AppError> {
        let household = sqlx::query_as::<_, Household>("SELECT * FROM households WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(household)
    }

    async fn insert(&self, fields: &NewHousehold) -> Result<Household, AppError> {
        sqlx::query_as::<_, Household>(
            r#"
            INSERT INTO households
                (household_number, head_of_family, purok, address, contact_number, family_members)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&fields.household_number)
        .bind(&fields.head_of_family)
        .bind(fields.purok)
        .bind(&fields.address)
        .bind(fields.contact_number.as_deref())
        .bind(fields.family_members)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateHouseholdNumber(fields.household_number.clone());
                }
            }
            e.into()
        })
    }

    async fn update(&self, id: Uuid, fields: &NewHousehold) -> Result<Option<Household>, AppError> {
        sqlx::query_as::<_, Household>(
            r#"
            UPDATE households
            SET household_number = $2,
                head_of_family = $3,
                purok = $4,
                address = $5,
                contact_number = $6,
                family_members = $7,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.household_number)
        .bind(&fields.head_of_family)
        .bind(fields.purok)
        .bind(&fields.address)
        .bind(fields.contact_number.as_deref())
        .bind(fields.family_members)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateHouseholdNumber(fields.household_number.clone());
                }
            }
            e.into()
        })
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Household>, AppError> {
        let household =
            sqlx::query_as::<_, Household>("DELETE FROM households WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(household)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM households")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
