use chrono::prelude::*;
use chrono_tz::Tz;
use itertools::Itertools;
use mealminder_domain::{ReminderSeries, TriggerId};

#[derive(Debug, Clone, PartialEq)]
pub enum RejectedOperation {
    Submit { trigger_at: i64 },
    Cancel { trigger_id: TriggerId },
}

/// A single call into the notification scheduler that failed.
/// It does not stop the rest of the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub operation: RejectedOperation,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTrigger {
    pub id: TriggerId,
    pub trigger_at: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CancelSummary {
    pub cancelled: Vec<TriggerId>,
    pub rejected: Vec<Rejection>,
}

/// Result of replacing the pending triggers of a `ReminderSeries`
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSummary {
    pub series: ReminderSeries,
    pub cancelled: CancelSummary,
    /// Sorted with the earliest trigger first
    pub scheduled: Vec<ScheduledTrigger>,
    pub rejected: Vec<Rejection>,
}

/// The terminal state of a scheduling action as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    Scheduled {
        series: ReminderSeries,
        instants: Vec<i64>,
        /// Submissions the scheduler rejected
        rejected: usize,
        /// Previous triggers of the series that are still pending
        not_cancelled: usize,
    },
    NoValidFutureReminders {
        series: ReminderSeries,
    },
    Failed {
        series: ReminderSeries,
        reason: String,
    },
}

impl ScheduleSummary {
    pub fn new(series: ReminderSeries, cancelled: CancelSummary) -> Self {
        Self {
            series,
            cancelled,
            scheduled: Vec::new(),
            rejected: Vec::new(),
        }
    }

    pub fn scheduled_count(&self) -> usize {
        self.scheduled.len()
    }

    pub fn outcome(&self) -> ScheduleOutcome {
        let series = self.series;
        if !self.scheduled.is_empty() {
            return ScheduleOutcome::Scheduled {
                series,
                instants: self.scheduled.iter().map(|t| t.trigger_at).collect(),
                rejected: self.rejected.len(),
                not_cancelled: self.cancelled.rejected.len(),
            };
        }
        match self
            .rejected
            .first()
            .or_else(|| self.cancelled.rejected.first())
        {
            Some(rejection) => ScheduleOutcome::Failed {
                series,
                reason: rejection.reason.clone(),
            },
            None => ScheduleOutcome::NoValidFutureReminders { series },
        }
    }
}

fn format_instant(trigger_at: i64, tz: &Tz) -> String {
    match tz.timestamp_millis_opt(trigger_at).single() {
        Some(dt) => dt.format("%a %b %e %Y %H:%M").to_string(),
        None => trigger_at.to_string(),
    }
}

impl ScheduleOutcome {
    pub fn scheduled_count(&self) -> usize {
        match self {
            Self::Scheduled { instants, .. } => instants.len(),
            _ => 0,
        }
    }

    /// Human readable description with instants shown in `tz`
    pub fn message(&self, tz: &Tz) -> String {
        match self {
            Self::Scheduled {
                series,
                instants,
                rejected,
                not_cancelled,
            } => {
                let mut message = format!(
                    "{} reminders scheduled for {} at:\n\n{}",
                    instants.len(),
                    series.display_label(),
                    instants.iter().map(|i| format_instant(*i, tz)).join("\n")
                );
                if *rejected > 0 {
                    message.push_str(&format!("\n\n{} could not be scheduled", rejected));
                }
                if *not_cancelled > 0 {
                    message.push_str(&format!(
                        "\n\n{} previous reminders could not be cancelled",
                        not_cancelled
                    ));
                }
                message
            }
            Self::NoValidFutureReminders { series } => format!(
                "No valid future {} reminders were found in this time range.",
                series.display_label()
            ),
            Self::Failed { reason, .. } => format!("Failed: {}", reason),
        }
    }
}
