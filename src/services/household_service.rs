// src/services/household_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::HouseholdStore,
    models::{
        activity::{ActionType, ActivityDetails, EntityType, NewActivityLog},
        household::{Household, HouseholdFilter, NewHousehold},
    },
    services::ActivityService,
};

#[derive(Clone)]
pub struct HouseholdService {
    household_repo: Arc<dyn HouseholdStore>,
    activity: ActivityService,
}

// Audit entries name a household as "<number> - <head of family>".
fn entity_name(household: &Household) -> String {
    format!(
        "{} - {}",
        household.household_number, household.head_of_family
    )
}

impl HouseholdService {
    pub fn new(household_repo: Arc<dyn HouseholdStore>, activity: ActivityService) -> Self {
        Self { household_repo, activity }
    }

    pub async fn list(&self, filter: &HouseholdFilter) -> Result<Vec<Household>, AppError> {
        self.household_repo.list(filter).await
    }

    /// Registers a household. Uniqueness of the household number is enforced
    /// by the store, not by a pre-check.
    pub async fn create(
        &self,
        fields: NewHousehold,
        performed_by: &str,
    ) -> Result<Household, AppError> {
        let household = self.household_repo.insert(&fields).await?;

        self.activity
            .log(NewActivityLog {
                action_type: ActionType::Create,
                entity_type: EntityType::Household,
                entity_id: Some(household.id),
                entity_name: entity_name(&household),
                performed_by: performed_by.to_string(),
                details: Some(ActivityDetails::Household {
                    purok: household.purok,
                    family_members: Some(household.family_members),
                }),
            })
            .await;

        Ok(household)
    }

    pub async fn update(
        &self,
        id: Uuid,
        fields: NewHousehold,
        performed_by: &str,
    ) -> Result<Household, AppError> {
        let household = self
            .household_repo
            .update(id, &fields)
            .await?
            .ok_or(AppError::NotFound("household"))?;

        self.activity
            .log(NewActivityLog {
                action_type: ActionType::Update,
                entity_type: EntityType::Household,
                entity_id: Some(household.id),
                entity_name: entity_name(&household),
                performed_by: performed_by.to_string(),
                details: Some(ActivityDetails::Household {
                    purok: household.purok,
                    family_members: None,
                }),
            })
            .await;

        Ok(household)
    }

    /// Deleting a household also removes its distributions (store-level
    /// cascade).
    pub async fn delete(&self, id: Uuid, performed_by: &str) -> Result<(), AppError> {
        let removed = self
            .household_repo
            .delete(id)
            .await?
            .ok_or(AppError::NotFound("household"))?;

        self.activity
            .log(NewActivityLog {
                action_type: ActionType::Delete,
                entity_type: EntityType::Household,
                entity_id: Some(removed.id),
                entity_name: entity_name(&removed),
                performed_by: performed_by.to_string(),
                details: Some(ActivityDetails::Household {
                    purok: removed.purok,
                    family_members: None,
                }),
            })
            .await;

        Ok(())
    }
}
