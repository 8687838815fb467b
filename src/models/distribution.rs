// src/models/distribution.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::household::Purok;
use crate::models::inventory::ItemCategory;

// --- Hand-out events ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub id: Uuid,
    pub household_id: Uuid,
    pub inventory_id: Uuid,
    pub quantity_distributed: i32,
    pub distributed_by: String,
    pub distributed_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// A distribution joined with the household and item it references,
/// as shown in the tracking table.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRecord {
    pub id: Uuid,
    pub household_id: Uuid,
    pub inventory_id: Uuid,
    pub quantity_distributed: i32,
    pub distributed_by: String,
    pub distributed_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub household_number: String,
    pub head_of_family: String,
    pub purok: Purok,
    pub item_name: String,
    pub unit: String,
    pub category: ItemCategory,
}

#[derive(Debug, Clone)]
pub struct NewDistribution {
    pub household_id: Uuid,
    pub inventory_id: Uuid,
    pub quantity_distributed: i32,
    pub distributed_by: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DistributionFilter {
    /// Equality filter on the household's purok.
    pub purok: Option<Purok>,
    /// Substring match on household number, head of family or item name.
    pub q: Option<String>,
}
