// src/models/household.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

// --- Purok (sub-district grouping) ---
// The labels carry a space ("Purok 1"), both in the database enum and in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "purok")]
pub enum Purok {
    #[sqlx(rename = "Purok 1")]
    #[serde(rename = "Purok 1")]
    Purok1,
    #[sqlx(rename = "Purok 2")]
    #[serde(rename = "Purok 2")]
    Purok2,
    #[sqlx(rename = "Purok 3")]
    #[serde(rename = "Purok 3")]
    Purok3,
    #[sqlx(rename = "Purok 4")]
    #[serde(rename = "Purok 4")]
    Purok4,
    #[sqlx(rename = "Purok 5")]
    #[serde(rename = "Purok 5")]
    Purok5,
    #[sqlx(rename = "Purok 6")]
    #[serde(rename = "Purok 6")]
    Purok6,
}

impl std::fmt::Display for Purok {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Purok::Purok1 => "Purok 1",
            Purok::Purok2 => "Purok 2",
            Purok::Purok3 => "Purok 3",
            Purok::Purok4 => "Purok 4",
            Purok::Purok5 => "Purok 5",
            Purok::Purok6 => "Purok 6",
        };
        f.write_str(label)
    }
}

// --- Registered beneficiary households ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub id: Uuid,
    pub household_number: String,
    pub head_of_family: String,
    pub purok: Purok,
    pub address: String,
    pub contact_number: Option<String>,
    pub family_members: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted on create and update.
#[derive(Debug, Clone)]
pub struct NewHousehold {
    pub household_number: String,
    pub head_of_family: String,
    pub purok: Purok,
    pub address: String,
    pub contact_number: Option<String>,
    pub family_members: i32,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HouseholdFilter {
    /// Equality filter on purok.
    pub purok: Option<Purok>,
    /// Substring match on household number, head of family or address.
    pub q: Option<String>,
}
