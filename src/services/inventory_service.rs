// src/services/inventory_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::InventoryStore,
    models::{
        activity::{ActionType, ActivityDetails, EntityType, NewActivityLog},
        inventory::{InventoryFilter, InventoryItem, NewInventoryItem},
    },
    services::ActivityService,
};

#[derive(Clone)]
pub struct InventoryService {
    inventory_repo: Arc<dyn InventoryStore>,
    activity: ActivityService,
}

impl InventoryService {
    pub fn new(inventory_repo: Arc<dyn InventoryStore>, activity: ActivityService) -> Self {
        Self { inventory_repo, activity }
    }

    pub async fn list(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItem>, AppError> {
        self.inventory_repo.list(filter).await
    }

    pub async fn create(
        &self,
        fields: NewInventoryItem,
        performed_by: &str,
    ) -> Result<InventoryItem, AppError> {
        let item = self.inventory_repo.insert(&fields).await?;

        self.activity
            .log(NewActivityLog {
                action_type: ActionType::Create,
                entity_type: EntityType::Inventory,
                entity_id: Some(item.id),
                entity_name: item.item_name.clone(),
                performed_by: performed_by.to_string(),
                details: Some(ActivityDetails::Inventory {
                    category: item.category,
                    quantity: Some(item.quantity),
                }),
            })
            .await;

        Ok(item)
    }

    pub async fn update(
        &self,
        id: Uuid,
        fields: NewInventoryItem,
        performed_by: &str,
    ) -> Result<InventoryItem, AppError> {
        let item = self
            .inventory_repo
            .update(id, &fields)
            .await?
            .ok_or(AppError::NotFound("inventory item"))?;

        self.activity
            .log(NewActivityLog {
                action_type: ActionType::Update,
                entity_type: EntityType::Inventory,
                entity_id: Some(item.id),
                entity_name: item.item_name.clone(),
                performed_by: performed_by.to_string(),
                details: Some(ActivityDetails::Inventory {
                    category: item.category,
                    quantity: Some(item.quantity),
                }),
            })
            .await;

        Ok(item)
    }

    pub async fn delete(&self, id: Uuid, performed_by: &str) -> Result<(), AppError> {
        let removed = self
            .inventory_repo
            .delete(id)
            .await?
            .ok_or(AppError::NotFound("inventory item"))?;

        self.activity
            .log(NewActivityLog {
                action_type: ActionType::Delete,
                entity_type: EntityType::Inventory,
                entity_id: Some(removed.id),
                entity_name: removed.item_name.clone(),
                performed_by: performed_by.to_string(),
                details: Some(ActivityDetails::Inventory {
                    category: removed.category,
                    quantity: None,
                }),
            })
            .await;

        Ok(())
    }
}
