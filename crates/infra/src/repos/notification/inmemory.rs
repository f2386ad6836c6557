use super::INotificationScheduler;
use crate::repos::shared::inmemory_repo::*;
use anyhow::anyhow;
use mealminder_domain::{NotificationContent, PendingTrigger, TriggerId};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};
use uuid::Uuid;

/// Scheduler that keeps the pending triggers in memory and never fires them
/// on its own. Failures of the real notification service can be simulated.
pub struct InMemoryNotificationScheduler {
    triggers: Mutex<Vec<PendingTrigger>>,
    /// Remaining submissions that are accepted, `None` means unlimited
    accepted_submissions: Mutex<Option<usize>>,
    rejects_cancellations: AtomicBool,
    keeps_metadata: bool,
}

impl InMemoryNotificationScheduler {
    pub fn new() -> Self {
        Self {
            triggers: Mutex::new(vec![]),
            accepted_submissions: Mutex::new(None),
            rejects_cancellations: AtomicBool::new(false),
            keeps_metadata: true,
        }
    }

    /// Scheduler that only round trips the title and body of a notification
    pub fn without_metadata() -> Self {
        Self {
            keeps_metadata: false,
            ..Self::new()
        }
    }

    pub fn reject_submissions_after(&self, accepted: usize) {
        *self.accepted_submissions.lock().unwrap() = Some(accepted);
    }

    pub fn accept_all_submissions(&self) {
        *self.accepted_submissions.lock().unwrap() = None;
    }

    pub fn reject_cancellations(&self, reject: bool) {
        self.rejects_cancellations.store(reject, Ordering::SeqCst);
    }

    /// Delivers every trigger due at `now`, removing it from the pending set
    pub fn fire_due(&self, now: i64) -> Vec<PendingTrigger> {
        find_and_delete_by(&self.triggers, |trigger| trigger.trigger_at <= now)
    }
}

impl Default for InMemoryNotificationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotificationScheduler for InMemoryNotificationScheduler {
    async fn submit(
        &self,
        content: &NotificationContent,
        trigger_at: i64,
    ) -> anyhow::Result<TriggerId> {
        {
            let mut accepted = self.accepted_submissions.lock().unwrap();
            match accepted.as_mut() {
                Some(0) => return Err(anyhow!("The notification service rejected the trigger")),
                Some(remaining) => *remaining -= 1,
                None => (),
            }
        }

        let mut content = content.clone();
        if !self.keeps_metadata {
            content.metadata.clear();
        }
        let trigger = PendingTrigger {
            id: TriggerId::new(Uuid::new_v4().to_string()),
            content,
            trigger_at,
        };
        insert(&trigger, &self.triggers);
        Ok(trigger.id)
    }

    async fn cancel(&self, trigger_id: &TriggerId) -> anyhow::Result<()> {
        if self.rejects_cancellations.load(Ordering::SeqCst) {
            return Err(anyhow!("Unable to cancel trigger: {}", trigger_id));
        }
        delete(trigger_id, &self.triggers);
        Ok(())
    }

    async fn list_pending(&self) -> anyhow::Result<Vec<PendingTrigger>> {
        Ok(find_all(&self.triggers))
    }

    async fn cancel_all(&self) -> anyhow::Result<()> {
        find_and_delete_by(&self.triggers, |_| true);
        Ok(())
    }
}
