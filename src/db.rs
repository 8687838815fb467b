pub mod inventory_repo;
pub use inventory_repo::{InventoryStore, PgInventoryRepository};
pub mod household_repo;
pub use household_repo::{HouseholdStore, PgHouseholdRepository};
pub mod distribution_repo;
pub use distribution_repo::{DistributionStore, PgDistributionRepository};
pub mod activity_repo;
pub use activity_repo::{ActivityStore, PgActivityRepository};
pub mod memory;
pub use memory::MemoryStore;
