// src/handlers/inventory.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::inventory::{InventoryFilter, InventoryItem, ItemCategory, NewInventoryItem},
};

// Inventory and household edits fall back to a fixed operator name when the
// caller does not supply one.
pub(crate) fn default_performed_by() -> String {
    "Admin User".to_string()
}

fn default_threshold() -> i32 {
    10
}

// ---
// Payload: create / update item
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertItemPayload {
    #[validate(length(min = 1, message = "Item name is required."))]
    pub item_name: String,

    pub category: ItemCategory,

    #[validate(range(min = 0, message = "Quantity cannot be negative."))]
    #[serde(default)]
    pub quantity: i32,

    #[validate(length(min = 1, message = "Unit is required."))]
    pub unit: String,

    #[validate(range(min = 0, message = "Low stock threshold cannot be negative."))]
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: i32,

    #[serde(default = "default_performed_by")]
    pub performed_by: String,
}

impl UpsertItemPayload {
    fn fields(&self) -> NewInventoryItem {
        NewInventoryItem {
            item_name: self.item_name.clone(),
            category: self.category,
            quantity: self.quantity,
            unit: self.unit.clone(),
            low_stock_threshold: self.low_stock_threshold,
        }
    }
}

// GET /api/inventory
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "Inventory",
    params(InventoryFilter),
    responses(
        (status = 200, description = "Relief-supply items, ordered by name", body = Vec<InventoryItem>)
    )
)]
pub async fn list_items(
    State(app_state): State<AppState>,
    Query(filter): Query<InventoryFilter>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.inventory_service.list(&filter).await?;
    Ok((StatusCode::OK, Json(items)))
}

// POST /api/inventory
#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = "Inventory",
    request_body = UpsertItemPayload,
    responses(
        (status = 201, description = "Item created", body = InventoryItem),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    Json(payload): Json<UpsertItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .inventory_service
        .create(payload.fields(), &payload.performed_by)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

// PUT /api/inventory/{id}
#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    tag = "Inventory",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = UpsertItemPayload,
    responses(
        (status = 200, description = "Item updated", body = InventoryItem),
        (status = 404, description = "Unknown item")
    )
)]
pub async fn update_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .inventory_service
        .update(id, payload.fields(), &payload.performed_by)
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

// DELETE /api/inventory/{id}
#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    tag = "Inventory",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Unknown item")
    )
)]
pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .inventory_service
        .delete(id, &default_performed_by())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
