// src/feed.rs
//
// Live activity feed: a broadcast bus decoupled from the storage backend.
// The activity service publishes every appended row; subscribers (the SSE
// endpoint, tests) receive rows appended after they subscribed. Slow
// subscribers may lag and skip rows; publishing never blocks.

use tokio::sync::broadcast;

use crate::models::activity::ActivityLog;

const FEED_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub struct ActivityFeed {
    sender: broadcast::Sender<ActivityLog>,
}

impl ActivityFeed {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(FEED_CAPACITY);
        Self { sender }
    }

    /// Deliver an appended row to all current subscribers.
    /// A send error only means nobody is listening.
    pub fn publish(&self, entry: ActivityLog) {
        if let Err(e) = self.sender.send(entry) {
            tracing::trace!("activity feed has no subscribers: {}", e);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ActivityLog> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::{ActionType, EntityType};
    use chrono::Utc;
    use uuid::Uuid;

    fn entry(name: &str) -> ActivityLog {
        ActivityLog {
            id: Uuid::new_v4(),
            action_type: ActionType::Create,
            entity_type: EntityType::Inventory,
            entity_id: None,
            entity_name: name.to_string(),
            performed_by: "Admin User".to_string(),
            details: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn subscribers_receive_published_entries() {
        let feed = ActivityFeed::new();
        let mut rx = feed.subscribe();

        feed.publish(entry("Rice Pack"));
        let received = rx.recv().await.unwrap();
        assert_eq!(received.entity_name, "Rice Pack");
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_no_op() {
        let feed = ActivityFeed::new();
        assert_eq!(feed.subscriber_count(), 0);
        feed.publish(entry("Rice Pack"));
    }

    #[tokio::test]
    async fn late_subscribers_miss_earlier_entries() {
        let feed = ActivityFeed::new();
        let mut early = feed.subscribe();
        feed.publish(entry("first"));

        let mut late = feed.subscribe();
        feed.publish(entry("second"));

        assert_eq!(early.recv().await.unwrap().entity_name, "first");
        assert_eq!(early.recv().await.unwrap().entity_name, "second");
        assert_eq!(late.recv().await.unwrap().entity_name, "second");
    }
}
