use crate::{
    error::MealminderError,
    ledger::{errors::ReplaceSeriesError, ReplaceSeriesUseCase, ScheduleSummary},
    shared::usecase::UseCase,
};
use mealminder_domain::{HydrationInterval, ReminderSeries};
use mealminder_infra::MealminderContext;

/// Replaces the pending hydration reminders with reminders at one and two
/// intervals from now. Uses the configured interval when none is given.
#[derive(Debug)]
pub struct ScheduleHydrationRemindersUseCase {
    pub interval: Option<HydrationInterval>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    PermissionDenied,
    SchedulerUnavailable(String),
}

impl From<ReplaceSeriesError> for UseCaseError {
    fn from(e: ReplaceSeriesError) -> Self {
        match e {
            ReplaceSeriesError::PermissionDenied => Self::PermissionDenied,
            ReplaceSeriesError::SchedulerUnavailable(reason) => Self::SchedulerUnavailable(reason),
        }
    }
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
impl UseCase for ScheduleHydrationRemindersUseCase {
    type Response = ScheduleSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleHydrationReminders";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        let interval = self.interval.unwrap_or(ctx.config.hydration_interval);
        let now = ctx.now();

        let mut replace = ReplaceSeriesUseCase {
            series: ReminderSeries::Hydration,
            now: now.timestamp_millis(),
            candidates: interval
                .instants_after(&now)
                .into_iter()
                .map(|instant| instant.timestamp_millis())
                .collect(),
        };
        Ok(replace.execute(ctx).await?)
    }
}
