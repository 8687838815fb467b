// src/handlers/distributions.rs

use axum::{
    extract::{Query, State},
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
    models::distribution::{
        Distribution, DistributionFilter, DistributionRecord, NewDistribution,
    },
};

fn default_quantity() -> i32 {
    1
}

// ---
// Payload: record a hand-out
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordDistributionPayload {
    #[validate(required(message = "The 'householdId' field is required."))]
    pub household_id: Option<Uuid>,

    #[validate(required(message = "The 'inventoryId' field is required."))]
    pub inventory_id: Option<Uuid>,

    #[validate(range(min = 1, message = "Quantity must be at least 1."))]
    #[serde(default = "default_quantity")]
    pub quantity_distributed: i32,

    #[validate(
        required(message = "The 'distributedBy' field is required."),
        length(min = 1, message = "The 'distributedBy' field is required.")
    )]
    pub distributed_by: Option<String>,

    pub notes: Option<String>,
}

// GET /api/distributions
#[utoipa::path(
    get,
    path = "/api/distributions",
    tag = "Distributions",
    params(DistributionFilter),
    responses(
        (status = 200, description = "Hand-outs joined with household and item, newest first", body = Vec<DistributionRecord>)
    )
)]
pub async fn list_distributions(
    State(app_state): State<AppState>,
    Query(filter): Query<DistributionFilter>,
) -> Result<impl IntoResponse, AppError> {
    let records = app_state.distribution_service.list(&filter).await?;
    Ok((StatusCode::OK, Json(records)))
}

// POST /api/distributions
#[utoipa::path(
    post,
    path = "/api/distributions",
    tag = "Distributions",
    request_body = RecordDistributionPayload,
    responses(
        (status = 201, description = "Distribution recorded, inventory decremented", body = Distribution),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Unknown household or item"),
        (status = 409, description = "Insufficient inventory quantity")
    )
)]
pub async fn record_distribution(
    State(app_state): State<AppState>,
    Json(payload): Json<RecordDistributionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let distribution = app_state
        .distribution_service
        .record(NewDistribution {
            household_id: payload.household_id.unwrap(),
            inventory_id: payload.inventory_id.unwrap(),
            quantity_distributed: payload.quantity_distributed,
            distributed_by: payload.distributed_by.unwrap(),
            notes: payload.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(distribution)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_references_fail_validation() {
        let payload: RecordDistributionPayload =
            serde_json::from_str(r#"{"distributedBy": "Officer A"}"#).unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("household_id"));
        assert!(fields.contains_key("inventory_id"));
    }

    #[test]
    fn blank_distributor_fails_validation() {
        let payload: RecordDistributionPayload = serde_json::from_str(
            r#"{
                "householdId": "7f2a9f2e-8d29-4a5f-9f6f-0a4fc9e2b7b1",
                "inventoryId": "4f0e54a7-6d8e-4f43-8e07-2cb9ab3a52a9",
                "distributedBy": ""
            }"#,
        )
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn quantity_defaults_to_one_and_must_be_positive() {
        let payload: RecordDistributionPayload = serde_json::from_str(
            r#"{
                "householdId": "7f2a9f2e-8d29-4a5f-9f6f-0a4fc9e2b7b1",
                "inventoryId": "4f0e54a7-6d8e-4f43-8e07-2cb9ab3a52a9",
                "distributedBy": "Officer A"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.quantity_distributed, 1);
        assert!(payload.validate().is_ok());

        let payload: RecordDistributionPayload = serde_json::from_str(
            r#"{
                "householdId": "7f2a9f2e-8d29-4a5f-9f6f-0a4fc9e2b7b1",
                "inventoryId": "4f0e54a7-6d8e-4f43-8e07-2cb9ab3a52a9",
                "quantityDistributed": 0,
                "distributedBy": "Officer A"
            }"#,
        )
        .unwrap();
        assert!(payload.validate().is_err());
    }
}
