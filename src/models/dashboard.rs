// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::inventory::InventoryItem;

/// Headline counts plus the items currently below their threshold.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_households: i64,
    pub total_items: i64,
    pub total_distributions: i64,
    pub total_activities: i64,
    pub low_stock_items: Vec<InventoryItem>,
}
