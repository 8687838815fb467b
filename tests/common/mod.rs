#![allow(dead_code)]

use std::sync::Arc;

use relieftrack_backend::{
    db::{ActivityStore, DistributionStore, HouseholdStore, InventoryStore, MemoryStore},
    feed::ActivityFeed,
    models::{
        household::{NewHousehold, Purok},
        inventory::{ItemCategory, NewInventoryItem},
    },
    services::{
        ActivityService, DashboardService, DistributionService, HouseholdService, InventoryService,
    },
};

/// The full service graph wired to one shared in-memory store, the same
/// shape `AppState::new` builds against Postgres.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub inventory: InventoryService,
    pub households: HouseholdService,
    pub distributions: DistributionService,
    pub activity: ActivityService,
    pub dashboard: DashboardService,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let feed = ActivityFeed::new();

    let activity = ActivityService::new(store.clone() as Arc<dyn ActivityStore>, feed);
    let inventory =
        InventoryService::new(store.clone() as Arc<dyn InventoryStore>, activity.clone());
    let households =
        HouseholdService::new(store.clone() as Arc<dyn HouseholdStore>, activity.clone());
    let distributions = DistributionService::new(
        store.clone() as Arc<dyn DistributionStore>,
        store.clone() as Arc<dyn InventoryStore>,
        store.clone() as Arc<dyn HouseholdStore>,
        activity.clone(),
    );
    let dashboard = DashboardService::new(
        store.clone() as Arc<dyn InventoryStore>,
        store.clone() as Arc<dyn HouseholdStore>,
        store.clone() as Arc<dyn DistributionStore>,
        store.clone() as Arc<dyn ActivityStore>,
    );

    TestApp {
        store,
        inventory,
        households,
        distributions,
        activity,
        dashboard,
    }
}

pub fn rice_pack() -> NewInventoryItem {
    NewInventoryItem {
        item_name: "Rice Pack".to_string(),
        category: ItemCategory::FoodPack,
        quantity: 10,
        unit: "packs".to_string(),
        low_stock_threshold: 5,
    }
}

pub fn household(number: &str) -> NewHousehold {
    NewHousehold {
        household_number: number.to_string(),
        head_of_family: "Juan Dela Cruz".to_string(),
        purok: Purok::Purok1,
        address: "Sitio Centro".to_string(),
        contact_number: Some("0917 000 0000".to_string()),
        family_members: 4,
    }
}
