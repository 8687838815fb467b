// src/services/dashboard_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{ActivityStore, DistributionStore, HouseholdStore, InventoryStore},
    models::dashboard::DashboardSummary,
};

#[derive(Clone)]
pub struct DashboardService {
    inventory_repo: Arc<dyn InventoryStore>,
    household_repo: Arc<dyn HouseholdStore>,
    distribution_repo: Arc<dyn DistributionStore>,
    activity_repo: Arc<dyn ActivityStore>,
}

impl DashboardService {
    pub fn new(
        inventory_repo: Arc<dyn InventoryStore>,
        household_repo: Arc<dyn HouseholdStore>,
        distribution_repo: Arc<dyn DistributionStore>,
        activity_repo: Arc<dyn ActivityStore>,
    ) -> Self {
        Self {
            inventory_repo,
            household_repo,
            distribution_repo,
            activity_repo,
        }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let (total_households, total_items, total_distributions, total_activities, low_stock_items) =
            tokio::try_join!(
                self.household_repo.count(),
                self.inventory_repo.count(),
                self.distribution_repo.count(),
                self.activity_repo.count(),
                self.inventory_repo.low_stock(),
            )?;

        Ok(DashboardSummary {
            total_households,
            total_items,
            total_distributions,
            total_activities,
            low_stock_items,
        })
    }
}
