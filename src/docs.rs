// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Inventory ---
        handlers::inventory::list_items,
        handlers::inventory::create_item,
        handlers::inventory::update_item,
        handlers::inventory::delete_item,

        // --- Households ---
        handlers::households::list_households,
        handlers::households::create_household,
        handlers::households::update_household,
        handlers::households::delete_household,

        // --- Distributions ---
        handlers::distributions::list_distributions,
        handlers::distributions::record_distribution,

        // --- Activity ---
        handlers::activity::list_activity,
        handlers::activity::live_activity,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
    ),
    components(
        schemas(
            models::inventory::InventoryItem,
            models::inventory::ItemCategory,
            models::inventory::StockStatus,
            models::household::Household,
            models::household::Purok,
            models::distribution::Distribution,
            models::distribution::DistributionRecord,
            models::activity::ActivityLog,
            models::activity::ActionType,
            models::activity::EntityType,
            models::activity::ActivityDetails,
            models::dashboard::DashboardSummary,
            handlers::inventory::UpsertItemPayload,
            handlers::households::UpsertHouseholdPayload,
            handlers::distributions::RecordDistributionPayload,
        )
    ),
    tags(
        (name = "Inventory", description = "Relief-supply items"),
        (name = "Households", description = "Beneficiary household registry"),
        (name = "Distributions", description = "Hand-out ledger"),
        (name = "Activity", description = "Append-only audit trail"),
        (name = "Dashboard", description = "Headline counts and low-stock alerts")
    )
)]
pub struct ApiDoc;
