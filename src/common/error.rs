// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("household number '{0}' already exists")]
    DuplicateHouseholdNumber(String),

    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i32, available: i32 },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("database error")]
    DatabaseError(#[from] sqlx::Error),

    // Catch-all for anything unexpected; anyhow keeps the context chain.
    #[error("internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Return every field-level validation message.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::DuplicateHouseholdNumber(_) => (
                StatusCode::CONFLICT,
                "Household number already exists. Please use a unique household number.".to_string(),
            ),
            AppError::InsufficientStock { requested, available } => (
                StatusCode::CONFLICT,
                format!("Insufficient inventory quantity: requested {requested}, available {available}."),
            ),
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found.")),

            // DatabaseError and InternalServerError both surface as 500.
            // tracing gets the detailed message, the client a generic one.
            ref e => {
                tracing::error!("Internal server error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_bad_request() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("householdNumber", validator::ValidationError::new("length"));
        let response = AppError::ValidationError(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_household_number_maps_to_conflict() {
        let response = AppError::DuplicateHouseholdNumber("HH-001".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn insufficient_stock_maps_to_conflict() {
        let response = AppError::InsufficientStock {
            requested: 20,
            available: 10,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("household").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_maps_to_internal() {
        let response = AppError::DatabaseError(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
