// src/models/inventory.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

// --- Relief-supply categories ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "item_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    FoodPack,
    HygieneKit,
    Medical,
    Clothing,
    Other,
}

/// Derived on every read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
}

// --- Inventory items ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub item_name: String,
    pub category: ItemCategory,
    pub quantity: i32,
    pub unit: String,
    pub low_stock_threshold: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Low stock means strictly below the threshold; equality is still in stock.
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity < self.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Fields accepted on create and update.
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub item_name: String,
    pub category: ItemCategory,
    pub quantity: i32,
    pub unit: String,
    pub low_stock_threshold: i32,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryFilter {
    /// Equality filter on category.
    pub category: Option<ItemCategory>,
    /// Case-insensitive substring match on the item name.
    pub q: Option<String>,
}
