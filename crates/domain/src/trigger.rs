use crate::{
    shared::{entity::Entity, metadata::Metadata},
    tagger, ReminderSeries, TriggerId,
};
use chrono::prelude::*;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// What the user sees when a trigger fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl NotificationContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            metadata: Default::default(),
        }
    }
}

/// A notification waiting in the scheduler to be delivered
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTrigger {
    pub id: TriggerId,
    pub content: NotificationContent,
    /// Timestamp in millis at which the notification fires
    pub trigger_at: i64,
}

impl Entity for PendingTrigger {
    fn id(&self) -> &TriggerId {
        &self.id
    }
}

impl PendingTrigger {
    /// The single series shown for this trigger. Use `belongs_to` to decide
    /// which series operate on it.
    pub fn series(&self) -> Option<ReminderSeries> {
        tagger::classify(&self.content)
    }

    pub fn belongs_to(&self, series: ReminderSeries) -> bool {
        tagger::matches(&self.content, series)
    }

    pub fn trigger_datetime(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.timestamp_millis_opt(self.trigger_at).single()
    }
}
