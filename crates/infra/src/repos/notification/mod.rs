mod inmemory;

pub use inmemory::InMemoryNotificationScheduler;
use mealminder_domain::{NotificationContent, PendingTrigger, TriggerId};

/// The host's local notification service.
///
/// Only the title and body of submitted content are required to round trip,
/// metadata may be dropped.
#[async_trait::async_trait]
pub trait INotificationScheduler: Send + Sync {
    /// Schedules a notification to fire at the timestamp `trigger_at` in millis
    async fn submit(
        &self,
        content: &NotificationContent,
        trigger_at: i64,
    ) -> anyhow::Result<TriggerId>;
    /// Cancelling a trigger that is not pending is not an error
    async fn cancel(&self, trigger_id: &TriggerId) -> anyhow::Result<()>;
    async fn list_pending(&self) -> anyhow::Result<Vec<PendingTrigger>>;
    async fn cancel_all(&self) -> anyhow::Result<()>;
}
