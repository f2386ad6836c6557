use super::{
    cancel_series::cancel_series_triggers,
    summary::{RejectedOperation, Rejection, ScheduleSummary, ScheduledTrigger},
};
use crate::{error::MealminderError, shared::usecase::UseCase};
use mealminder_domain::{tagger, ReminderSeries};
use mealminder_infra::MealminderContext;
use tracing::{info, warn};

/// Replaces the pending triggers of a `ReminderSeries` with one trigger per
/// candidate instant.
///
/// All cancellations complete before the first submission. The pair is not
/// atomic in the scheduler, and a failed submission does not roll back the
/// cancellations or the submissions that succeeded before it.
#[derive(Debug)]
pub struct ReplaceSeriesUseCase {
    pub series: ReminderSeries,
    /// Timestamp in millis the candidates were computed for
    pub now: i64,
    /// Timestamps in millis, candidates not after `now` are skipped
    pub candidates: Vec<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    PermissionDenied,
    SchedulerUnavailable(String),
}

impl From<UseCaseError> for MealminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::PermissionDenied => Self::PermissionRequired,
            UseCaseError::SchedulerUnavailable(reason) => Self::Failed(reason),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ReplaceSeriesUseCase {
    type Response = ScheduleSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "ReplaceSeries";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        if !ctx.repos.permissions.request_permission().await {
            return Err(UseCaseError::PermissionDenied);
        }

        let cancelled = cancel_series_triggers(self.series, ctx)
            .await
            .map_err(|e| UseCaseError::SchedulerUnavailable(e.to_string()))?;

        let threshold = self.now + ctx.config.min_lead_millis;
        let mut candidates = self
            .candidates
            .iter()
            .copied()
            .filter(|trigger_at| *trigger_at > threshold)
            .collect::<Vec<_>>();
        candidates.sort_unstable();
        candidates.dedup();

        let content = tagger::content_for(self.series);
        let mut summary = ScheduleSummary::new(self.series, cancelled);
        for trigger_at in candidates {
            match ctx.repos.notifications.submit(&content, trigger_at).await {
                Ok(id) => summary.scheduled.push(ScheduledTrigger { id, trigger_at }),
                Err(e) => {
                    warn!(
                        "Unable to schedule trigger at {} for series {}. Err: {:?}",
                        trigger_at, self.series, e
                    );
                    summary.rejected.push(Rejection {
                        operation: RejectedOperation::Submit { trigger_at },
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Series {}: cancelled {}, scheduled {}, rejected {}",
            self.series,
            summary.cancelled.cancelled.len(),
            summary.scheduled.len(),
            summary.rejected.len()
        );
        Ok(summary)
    }
}
