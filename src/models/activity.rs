// src/models/activity.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::household::Purok;
use crate::models::inventory::ItemCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "action_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "entity_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Inventory,
    Household,
    Distribution,
}

/// Structured per-entity payload of an audit entry. The variant must agree
/// with the row's `entity_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum ActivityDetails {
    Inventory {
        category: ItemCategory,
        #[serde(skip_serializing_if = "Option::is_none")]
        quantity: Option<i32>,
    },
    Household {
        purok: Purok,
        #[serde(skip_serializing_if = "Option::is_none")]
        family_members: Option<i32>,
    },
    Distribution {
        quantity: i32,
        item: String,
        household: String,
        purok: Purok,
    },
}

// --- Audit trail rows (append-only) ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: Uuid,
    pub action_type: ActionType,
    pub entity_type: EntityType,
    pub entity_id: Option<Uuid>,
    pub entity_name: String,
    pub performed_by: String,
    #[schema(value_type = Option<ActivityDetails>)]
    pub details: Option<Json<ActivityDetails>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub action_type: ActionType,
    pub entity_type: EntityType,
    pub entity_id: Option<Uuid>,
    pub entity_name: String,
    pub performed_by: String,
    pub details: Option<ActivityDetails>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityFilter {
    /// Equality filter on the affected entity kind.
    pub entity_type: Option<EntityType>,
    /// Equality filter on the action.
    pub action_type: Option<ActionType>,
    /// Substring match on entity name or performer.
    pub q: Option<String>,
    /// Newest-first row cap, 200 when omitted.
    pub limit: Option<i64>,
}

impl ActivityFilter {
    pub const DEFAULT_LIMIT: i64 = 200;

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_are_tagged_by_entity() {
        let details = ActivityDetails::Distribution {
            quantity: 4,
            item: "Rice Pack".to_string(),
            household: "HH-001".to_string(),
            purok: Purok::Purok3,
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["entity"], "distribution");
        assert_eq!(value["quantity"], 4);
        assert_eq!(value["purok"], "Purok 3");
    }

    #[test]
    fn absent_optional_fields_are_omitted() {
        let details = ActivityDetails::Inventory {
            category: ItemCategory::Medical,
            quantity: None,
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["entity"], "inventory");
        assert!(value.get("quantity").is_none());
    }

    #[test]
    fn details_round_trip_through_json() {
        let details = ActivityDetails::Household {
            purok: Purok::Purok6,
            family_members: Some(5),
        };
        let text = serde_json::to_string(&details).unwrap();
        let back: ActivityDetails = serde_json::from_str(&text).unwrap();
        assert_eq!(back, details);
    }

    #[test]
    fn list_limit_defaults_to_200() {
        assert_eq!(ActivityFilter::default().limit(), 200);
        let filter = ActivityFilter {
            limit: Some(25),
            ..Default::default()
        };
        assert_eq!(filter.limit(), 25);
    }
}
