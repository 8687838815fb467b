// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{
        ActivityStore, DistributionStore, HouseholdStore, InventoryStore, PgActivityRepository,
        PgDistributionRepository, PgHouseholdRepository, PgInventoryRepository,
    },
    feed::ActivityFeed,
    services::{
        ActivityService, DashboardService, DistributionService, HouseholdService, InventoryService,
    },
};

// Shared state, accessible from every handler.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub inventory_service: InventoryService,
    pub household_service: HouseholdService,
    pub distribution_service: DistributionService,
    pub activity_service: ActivityService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Database connection established!");

        // --- Dependency graph ---
        let inventory_repo: Arc<dyn InventoryStore> =
            Arc::new(PgInventoryRepository::new(db_pool.clone()));
        let household_repo: Arc<dyn HouseholdStore> =
            Arc::new(PgHouseholdRepository::new(db_pool.clone()));
        let distribution_repo: Arc<dyn DistributionStore> =
            Arc::new(PgDistributionRepository::new(db_pool.clone()));
        let activity_repo: Arc<dyn ActivityStore> =
            Arc::new(PgActivityRepository::new(db_pool.clone()));

        let feed = ActivityFeed::new();
        let activity_service = ActivityService::new(activity_repo.clone(), feed);
        let inventory_service =
            InventoryService::new(inventory_repo.clone(), activity_service.clone());
        let household_service =
            HouseholdService::new(household_repo.clone(), activity_service.clone());
        let distribution_service = DistributionService::new(
            distribution_repo.clone(),
            inventory_repo.clone(),
            household_repo.clone(),
            activity_service.clone(),
        );
        let dashboard_service = DashboardService::new(
            inventory_repo,
            household_repo,
            distribution_repo,
            activity_repo,
        );

        Ok(Self {
            db_pool,
            inventory_service,
            household_service,
            distribution_service,
            activity_service,
            dashboard_service,
        })
    }
}
