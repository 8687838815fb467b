// src/handlers/households.rs

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
    handlers::inventory::default_performed_by,
    models::household::{Household, HouseholdFilter, NewHousehold, Purok},
};

fn default_family_members() -> i32 {
    1
}

// ---
// Payload: register / update household
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertHouseholdPayload {
    #[validate(length(min = 1, message = "Household number is required."))]
    pub household_number: String,

    #[validate(length(min = 1, message = "Head of family is required."))]
    pub head_of_family: String,

    pub purok: Purok,

    #[validate(length(min = 1, message = "Address is required."))]
    pub address: String,

    pub contact_number: Option<String>,

    #[validate(range(min = 1, message = "Family members must be at least 1."))]
    #[serde(default = "default_family_members")]
    pub family_members: i32,

    #[serde(default = "default_performed_by")]
    pub performed_by: String,
}

impl UpsertHouseholdPayload {
    fn fields(&self) -> NewHousehold {
        NewHousehold {
            household_number: self.household_number.clone(),
            head_of_family: self.head_of_family.clone(),
            purok: self.purok,
            address: self.address.clone(),
            contact_number: self.contact_number.clone(),
            family_members: self.family_members,
        }
    }
}

// GET /api/households
#[utoipa::path(
    get,
    path = "/api/households",
    tag = "Households",
    params(HouseholdFilter),
    responses(
        (status = 200, description = "Registered households, ordered by number", body = Vec<Household>)
    )
)]
pub async fn list_households(
    State(app_state): State<AppState>,
    Query(filter): Query<HouseholdFilter>,
) -> Result<impl IntoResponse, AppError> {
    let households = app_state.household_service.list(&filter).await?;
    Ok((StatusCode::OK, Json(households)))
}

// POST /api/households
#[utoipa::path(
    post,
    path = "/api/households",
    tag = "Households",
    request_body = UpsertHouseholdPayload,
    responses(
        (status = 201, description = "Household registered", body = Household),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Household number already exists")
    )
)]
pub async fn create_household(
    State(app_state): State<AppState>,
    Json(payload): Json<UpsertHouseholdPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let household = app_state
        .household_service
        .create(payload.fields(), &payload.performed_by)
        .await?;

    Ok((StatusCode::CREATED, Json(household)))
}

// PUT /api/households/{id}
#[utoipa::path(
    put,
    path = "/api/households/{id}",
    tag = "Households",
    params(("id" = Uuid, Path, description = "Household id")),
    request_body = UpsertHouseholdPayload,
    responses(
        (status = 200, description = "Household updated", body = Household),
        (status = 404, description = "Unknown household"),
        (status = 409, description = "Household number already exists")
    )
)]
pub async fn update_household(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertHouseholdPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let household = app_state
        .household_service
        .update(id, payload.fields(), &payload.performed_by)
        .await?;

    Ok((StatusCode::OK, Json(household)))
}

// DELETE /api/households/{id}
#[utoipa::path(
    delete,
    path = "/api/households/{id}",
    tag = "Households",
    params(("id" = Uuid, Path, description = "Household id")),
    responses(
        (status = 204, description = "Household deleted, distributions cascaded"),
        (status = 404, description = "Unknown household")
    )
)]
pub async fn delete_household(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .household_service
        .delete(id, &default_performed_by())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
