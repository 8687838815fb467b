// src/db/memory.rs
//
// In-memory backend implementing every storage trait, for tests and
// embedding. Mirrors the Postgres semantics: unique household numbers,
// guarded decrements, cascade from household to its distributions,
// newest-first capped activity reads.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ActivityStore, DistributionStore, HouseholdStore, InventoryStore},
    models::{
        activity::{ActivityFilter, ActivityLog, NewActivityLog},
        distribution::{Distribution, DistributionFilter, DistributionRecord, NewDistribution},
        household::{Household, HouseholdFilter, NewHousehold},
        inventory::{InventoryFilter, InventoryItem, NewInventoryItem},
    },
};

#[derive(Default)]
struct MemoryInner {
    items: Vec<InventoryItem>,
    households: Vec<Household>,
    distributions: Vec<Distribution>,
    logs: Vec<ActivityLog>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>, AppError> {
        let inner = self.inner.read().await;
        let mut items: Vec<InventoryItem> = inner
            .items
            .iter()
            .filter(|i| filter.category.is_none_or(|c| i.category == c))
            .filter(|i| {
                filter
                    .q
                    .as_deref()
                    .is_none_or(|q| contains(&i.item_name, q))
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.item_name.cmp(&b.item_name));
        Ok(items)
    }

    async fn get(&self, id: Uuid) -> Result<Option<InventoryItem>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.items.iter().find(|i| i.id == id).cloned())
    }

    async fn insert(&self, fields: &NewInventoryItem) -> Result<InventoryItem, AppError> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let item = InventoryItem {
            id: Uuid::new_v4(),
            item_name: fields.item_name.clone(),
            category: fields.category,
            quantity: fields.quantity,
            unit: fields.unit.clone(),
            low_stock_threshold: fields.low_stock_threshold,
            created_at: now,
            updated_at: now,
        };
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: &NewInventoryItem,
    ) -> Result<Option<InventoryItem>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(item) = inner.items.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        item.item_name = fields.item_name.clone();
        item.category = fields.category;
        item.quantity = fields.quantity;
        item.unit = fields.unit.clone();
        item.low_stock_threshold = fields.low_stock_threshold;
        item.updated_at = Utc::now();
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<InventoryItem>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(pos) = inner.items.iter().position(|i| i.id == id) else {
            return Ok(None);
        };
        Ok(Some(inner.items.remove(pos)))
    }

    async fn decrement(&self, id: Uuid, amount: i32) -> Result<InventoryItem, AppError> {
        let mut inner = self.inner.write().await;
        let Some(item) = inner.items.iter_mut().find(|i| i.id == id) else {
            return Err(AppError::NotFound("inventory item"));
        };
        if item.quantity < amount {
            return Err(AppError::InsufficientStock {
                requested: amount,
                available: item.quantity,
            });
        }
        item.quantity -= amount;
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.items.len() as i64)
    }

    async fn low_stock(&self) -> Result<Vec<InventoryItem>, AppError> {
        let inner = self.inner.read().await;
        let mut items: Vec<InventoryItem> = inner
            .items
            .iter()
            .filter(|i| i.quantity < i.low_stock_threshold)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.quantity);
        Ok(items)
    }
}

#[async_trait]
impl HouseholdStore for MemoryStore {
    async fn list(&self, filter: &HouseholdFilter) -> Result<Vec<Household>, AppError> {
        let inner = self.inner.read().await;
        let mut households: Vec<Household> = inner
            .households
            .iter()
            .filter(|h| filter.purok.is_none_or(|p| h.purok == p))
            .filter(|h| {
                filter.q.as_deref().is_none_or(|q| {
                    contains(&h.household_number, q)
                        || contains(&h.head_of_family, q)
                        || contains(&h.address, q)
                })
            })
            .cloned()
            .collect();
        households.sort_by(|a, b| a.household_number.cmp(&b.household_number));
        Ok(households)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Household>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.households.iter().find(|h| h.id == id).cloned())
    }

    async fn insert(&self, fields: &NewHousehold) -> Result<Household, AppError> {
        let mut inner = self.inner.write().await;
        if inner
            .households
            .iter()
            .any(|h| h.household_number == fields.household_number)
        {
            return Err(AppError::DuplicateHouseholdNumber(
                fields.household_number.clone(),
            ));
        }
        let now = Utc::now();
        let household = Household {
            id: Uuid::new_v4(),
            household_number: fields.household_number.clone(),
            head_of_family: fields.head_of_family.clone(),
            purok: fields.purok,
            address: fields.address.clone(),
            contact_number: fields.contact_number.clone(),
            family_members: fields.family_members,
            created_at: now,
            updated_at: now,
        };
        inner.households.push(household.clone());
        Ok(household)
    }

    async fn update(&self, id: Uuid, fields: &NewHousehold) -> Result<Option<Household>, AppError> {
        let mut inner = self.inner.write().await;
        if inner
            .households
            .iter()
            .any(|h| h.id != id && h.household_number == fields.household_number)
        {
            return Err(AppError::DuplicateHouseholdNumber(
                fields.household_number.clone(),
            ));
        }
        let Some(household) = inner.households.iter_mut().find(|h| h.id == id) else {
            return Ok(None);
        };
        household.household_number = fields.household_number.clone();
        household.head_of_family = fields.head_of_family.clone();
        household.purok = fields.purok;
        household.address = fields.address.clone();
        household.contact_number = fields.contact_number.clone();
        household.family_members = fields.family_members;
        household.updated_at = Utc::now();
        Ok(Some(household.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Household>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(pos) = inner.households.iter().position(|h| h.id == id) else {
            return Ok(None);
        };
        let removed = inner.households.remove(pos);
        // Same behavior as the ON DELETE CASCADE constraint.
        inner.distributions.retain(|d| d.household_id != id);
        Ok(Some(removed))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.households.len() as i64)
    }
}

#[async_trait]
impl DistributionStore for MemoryStore {
    async fn list(&self, filter: &DistributionFilter) -> Result<Vec<DistributionRecord>, AppError> {
        let inner = self.inner.read().await;
        let mut records: Vec<DistributionRecord> = inner
            .distributions
            .iter()
            .filter_map(|d| {
                // Inner-join semantics: drop rows whose references are gone.
                let household = inner.households.iter().find(|h| h.id == d.household_id)?;
                let item = inner.items.iter().find(|i| i.id == d.inventory_id)?;
                Some(DistributionRecord {
                    id: d.id,
                    household_id: d.household_id,
                    inventory_id: d.inventory_id,
                    quantity_distributed: d.quantity_distributed,
                    distributed_by: d.distributed_by.clone(),
                    distributed_at: d.distributed_at,
                    notes: d.notes.clone(),
                    household_number: household.household_number.clone(),
                    head_of_family: household.head_of_family.clone(),
                    purok: household.purok,
                    item_name: item.item_name.clone(),
                    unit: item.unit.clone(),
                    category: item.category,
                })
            })
            .filter(|r| filter.purok.is_none_or(|p| r.purok == p))
            .filter(|r| {
                filter.q.as_deref().is_none_or(|q| {
                    contains(&r.household_number, q)
                        || contains(&r.head_of_family, q)
                        || contains(&r.item_name, q)
                })
            })
            .collect();
        records.sort_by(|a, b| b.distributed_at.cmp(&a.distributed_at));
        Ok(records)
    }

    async fn insert(&self, fields: &NewDistribution) -> Result<Distribution, AppError> {
        let mut inner = self.inner.write().await;
        let distribution = Distribution {
            id: Uuid::new_v4(),
            household_id: fields.household_id,
            inventory_id: fields.inventory_id,
            quantity_distributed: fields.quantity_distributed,
            distributed_by: fields.distributed_by.clone(),
            distributed_at: Utc::now(),
            notes: fields.notes.clone(),
        };
        inner.distributions.push(distribution.clone());
        Ok(distribution)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.distributions.len() as i64)
    }
}

#[async_trait]
impl ActivityStore for MemoryStore {
    async fn append(&self, entry: &NewActivityLog) -> Result<ActivityLog, AppError> {
        let mut inner = self.inner.write().await;
        let row = ActivityLog {
            id: Uuid::new_v4(),
            action_type: entry.action_type,
            entity_type: entry.entity_type,
            entity_id: entry.entity_id,
            entity_name: entry.entity_name.clone(),
            performed_by: entry.performed_by.clone(),
            details: entry.details.clone().map(Json),
            created_at: Utc::now(),
        };
        inner.logs.push(row.clone());
        Ok(row)
    }

    async fn list(&self, filter: &ActivityFilter) -> Result<Vec<ActivityLog>, AppError> {
        let inner = self.inner.read().await;
        let rows: Vec<ActivityLog> = inner
            .logs
            .iter()
            .rev()
            .filter(|l| filter.entity_type.is_none_or(|e| l.entity_type == e))
            .filter(|l| filter.action_type.is_none_or(|a| l.action_type == a))
            .filter(|l| {
                filter.q.as_deref().is_none_or(|q| {
                    contains(&l.entity_name, q) || contains(&l.performed_by, q)
                })
            })
            .take(filter.limit().max(0) as usize)
            .cloned()
            .collect();
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.logs.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{household::Purok, inventory::ItemCategory};

    fn rice_pack(quantity: i32) -> NewInventoryItem {
        NewInventoryItem {
            item_name: "Rice Pack".to_string(),
            category: ItemCategory::FoodPack,
            quantity,
            unit: "sacks".to_string(),
            low_stock_threshold: 5,
        }
    }

    fn household(number: &str) -> NewHousehold {
        NewHousehold {
            household_number: number.to_string(),
            head_of_family: "Juan Dela Cruz".to_string(),
            purok: Purok::Purok1,
            address: "Sitio Centro".to_string(),
            contact_number: None,
            family_members: 4,
        }
    }

    #[tokio::test]
    async fn decrement_is_guarded() {
        let store = MemoryStore::new();
        let item = InventoryStore::insert(&store, &rice_pack(10)).await.unwrap();

        let updated = store.decrement(item.id, 4).await.unwrap();
        assert_eq!(updated.quantity, 6);

        let err = store.decrement(item.id, 7).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientStock { requested: 7, available: 6 }
        ));
        // Quantity untouched by the failed decrement.
        let item = InventoryStore::get(&store, item.id).await.unwrap().unwrap();
        assert_eq!(item.quantity, 6);
    }

    #[tokio::test]
    async fn household_numbers_are_unique() {
        let store = MemoryStore::new();
        HouseholdStore::insert(&store, &household("HH-001")).await.unwrap();

        let err = HouseholdStore::insert(&store, &household("HH-001"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateHouseholdNumber(n) if n == "HH-001"));
        assert_eq!(HouseholdStore::count(&store).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn update_may_keep_own_number() {
        let store = MemoryStore::new();
        let hh = HouseholdStore::insert(&store, &household("HH-001")).await.unwrap();

        let mut fields = household("HH-001");
        fields.family_members = 6;
        let updated = HouseholdStore::update(&store, hh.id, &fields)
            .await
            .unwrap()
            .expect("household exists");
        assert_eq!(updated.family_members, 6);
    }

    #[tokio::test]
    async fn household_delete_cascades_to_distributions() {
        let store = MemoryStore::new();
        let item = InventoryStore::insert(&store, &rice_pack(10)).await.unwrap();
        let hh = HouseholdStore::insert(&store, &household("HH-001")).await.unwrap();
        DistributionStore::insert(
            &store,
            &NewDistribution {
                household_id: hh.id,
                inventory_id: item.id,
                quantity_distributed: 2,
                distributed_by: "Officer A".to_string(),
                notes: None,
            },
        )
        .await
        .unwrap();

        HouseholdStore::delete(&store, hh.id).await.unwrap();
        assert_eq!(DistributionStore::count(&store).await.unwrap(), 0);
    }
}
