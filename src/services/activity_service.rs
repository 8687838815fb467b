// src/services/activity_service.rs

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::{
    common::error::AppError,
    db::ActivityStore,
    feed::ActivityFeed,
    models::activity::{ActivityFilter, ActivityLog, NewActivityLog},
};

#[derive(Clone)]
pub struct ActivityService {
    activity_repo: Arc<dyn ActivityStore>,
    feed: ActivityFeed,
}

impl ActivityService {
    pub fn new(activity_repo: Arc<dyn ActivityStore>, feed: ActivityFeed) -> Self {
        Self { activity_repo, feed }
    }

    /// Append an audit entry and publish it on the live feed.
    ///
    /// The audit trail is advisory: a failed append is logged and swallowed,
    /// never failing the mutation that triggered it.
    pub async fn log(&self, entry: NewActivityLog) {
        match self.activity_repo.append(&entry).await {
            Ok(row) => self.feed.publish(row),
            Err(e) => {
                tracing::error!(
                    "failed to append activity log for '{}': {}",
                    entry.entity_name,
                    e
                );
            }
        }
    }

    pub async fn list(&self, filter: &ActivityFilter) -> Result<Vec<ActivityLog>, AppError> {
        self.activity_repo.list(filter).await
    }

    /// Rows appended after this call are delivered to the receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<ActivityLog> {
        self.feed.subscribe()
    }
}
