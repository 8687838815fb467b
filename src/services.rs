pub mod activity_service;
pub use activity_service::ActivityService;
pub mod inventory_service;
pub use inventory_service::InventoryService;
pub mod household_service;
pub use household_service::HouseholdService;
pub mod distribution_service;
pub use distribution_service::DistributionService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
