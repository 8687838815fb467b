// src/services/distribution_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{DistributionStore, HouseholdStore, InventoryStore},
    models::{
        activity::{ActionType, ActivityDetails, EntityType, NewActivityLog},
        distribution::{Distribution, DistributionFilter, DistributionRecord, NewDistribution},
    },
    services::ActivityService,
};

#[derive(Clone)]
pub struct DistributionService {
    distribution_repo: Arc<dyn DistributionStore>,
    inventory_repo: Arc<dyn InventoryStore>,
    household_repo: Arc<dyn HouseholdStore>,
    activity: ActivityService,
}

impl DistributionService {
    pub fn new(
        distribution_repo: Arc<dyn DistributionStore>,
        inventory_repo: Arc<dyn InventoryStore>,
        household_repo: Arc<dyn HouseholdStore>,
        activity: ActivityService,
    ) -> Self {
        Self {
            distribution_repo,
            inventory_repo,
            household_repo,
            activity,
        }
    }

    pub async fn list(&self, filter: &DistributionFilter) -> Result<Vec<DistributionRecord>, AppError> {
        self.distribution_repo.list(filter).await
    }

    /// Record a hand-out: insert the ledger row, decrement the item,
    /// append one audit entry.
    ///
    /// Nothing is mutated before the insert. If the guarded decrement fails
    /// after the insert (a concurrent hand-out consumed the remaining stock),
    /// the ledger row stands without its decrement; the error is surfaced and
    /// the inconsistency logged. Quantity itself can never go negative.
    pub async fn record(&self, fields: NewDistribution) -> Result<Distribution, AppError> {
        let household = self
            .household_repo
            .get(fields.household_id)
            .await?
            .ok_or(AppError::NotFound("household"))?;

        let item = self
            .inventory_repo
            .get(fields.inventory_id)
            .await?
            .ok_or(AppError::NotFound("inventory item"))?;

        if fields.quantity_distributed > item.quantity {
            return Err(AppError::InsufficientStock {
                requested: fields.quantity_distributed,
                available: item.quantity,
            });
        }

        let distribution = self.distribution_repo.insert(&fields).await?;

        if let Err(e) = self
            .inventory_repo
            .decrement(fields.inventory_id, fields.quantity_distributed)
            .await
        {
            tracing::error!(
                "distribution {} recorded but item {} was not decremented: {}",
                distribution.id,
                fields.inventory_id,
                e
            );
            return Err(e);
        }

        self.activity
            .log(NewActivityLog {
                action_type: ActionType::Create,
                entity_type: EntityType::Distribution,
                entity_id: Some(distribution.id),
                entity_name: format!("{} to {}", item.item_name, household.household_number),
                performed_by: fields.distributed_by.clone(),
                details: Some(ActivityDetails::Distribution {
                    quantity: fields.quantity_distributed,
                    item: item.item_name.clone(),
                    household: household.household_number.clone(),
                    purok: household.purok,
                }),
            })
            .await;

        Ok(distribution)
    }
}
