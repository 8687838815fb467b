// Dashboard aggregation over the in-memory backend.

mod common;

use common::{household, rice_pack, test_app};
use relieftrack_backend::models::distribution::NewDistribution;

#[tokio::test]
async fn summary_reports_totals_and_low_stock() {
    let app = test_app();
    let item = app.inventory.create(rice_pack(), "Admin User").await.unwrap();
    let hh = app.households.create(household("HH-001"), "Admin User").await.unwrap();

    // 10 on hand, threshold 5: not low yet.
    let summary = app.dashboard.summary().await.unwrap();
    assert_eq!(summary.total_items, 1);
    assert_eq!(summary.total_households, 1);
    assert_eq!(summary.total_distributions, 0);
    // Item create + household create.
    assert_eq!(summary.total_activities, 2);
    assert!(summary.low_stock_items.is_empty());

    app.distributions
        .record(NewDistribution {
            household_id: hh.id,
            inventory_id: item.id,
            quantity_distributed: 6,
            distributed_by: "Officer A".to_string(),
            notes: None,
        })
        .await
        .unwrap();

    // 4 left against a threshold of 5.
    let summary = app.dashboard.summary().await.unwrap();
    assert_eq!(summary.total_distributions, 1);
    assert_eq!(summary.total_activities, 3);
    assert_eq!(summary.low_stock_items.len(), 1);
    assert_eq!(summary.low_stock_items[0].quantity, 4);
}
