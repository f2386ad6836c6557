use super::summary::{CancelSummary, RejectedOperation, Rejection};
use crate::{error::MealminderError, shared::usecase::UseCase};
use mealminder_domain::ReminderSeries;
use mealminder_infra::MealminderContext;
use tracing::{info, warn};

/// Cancels every pending trigger of a `ReminderSeries`.
/// Cancelling a series without pending triggers is a no-op.
#[derive(Debug)]
pub struct CancelSeriesUseCase {
    pub series: ReminderSeries,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    SchedulerUnavailable(String),
}

impl From<UseCaseError> for MealminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::SchedulerUnavailable(reason) => Self::Failed(reason),
        }
    }
}

/// Lists the pending triggers and cancels the ones classified into `series`.
/// Individual cancellations that fail are collected, not retried.
pub(crate) async fn cancel_series_triggers(
    series: ReminderSeries,
    ctx: &MealminderContext,
) -> anyhow::Result<CancelSummary> {
    let pending = ctx.repos.notifications.list_pending().await?;

    let mut summary = CancelSummary::default();
    for trigger in pending.into_iter().filter(|t| t.belongs_to(series)) {
        match ctx.repos.notifications.cancel(&trigger.id).await {
            Ok(_) => summary.cancelled.push(trigger.id),
            Err(e) => {
                warn!(
                    "Unable to cancel trigger {} of series {}. Err: {:?}",
                    trigger.id, series, e
                );
                summary.rejected.push(Rejection {
                    operation: RejectedOperation::Cancel {
                        trigger_id: trigger.id,
                    },
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(summary)
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelSeriesUseCase {
    type Response = CancelSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "CancelSeries";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        let summary = cancel_series_triggers(self.series, ctx)
            .await
            .map_err(|e| UseCaseError::SchedulerUnavailable(e.to_string()))?;

        info!(
            "Cancelled {} pending triggers of series {}",
            summary.cancelled.len(),
            self.series
        );
        Ok(summary)
    }
}
