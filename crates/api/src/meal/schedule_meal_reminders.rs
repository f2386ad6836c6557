use crate::{
    error::MealminderError,
    ledger::{errors::ReplaceSeriesError, ReplaceSeriesUseCase, ScheduleSummary},
    shared::usecase::UseCase,
};
use chrono::prelude::*;
use chrono_tz::Tz;
use mealminder_domain::{next_occurrences, MealKind, MealSettings, RepeatHorizon, ReminderSeries};
use mealminder_infra::MealminderContext;

/// Replaces the pending reminders of a meal with the reminders derived
/// from its saved time window and repeat flag
#[derive(Debug)]
pub struct ScheduleMealRemindersUseCase {
    pub meal: MealKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledMealReminders {
    pub settings: MealSettings,
    pub summary: ScheduleSummary,
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

/// A single occurrence per offset, or every occurrence within the
/// horizon when the meal repeats
pub(crate) fn reminder_candidates(
    settings: &MealSettings,
    horizon: &RepeatHorizon,
    now: &DateTime<Tz>,
) -> Vec<i64> {
    let offsets = settings.window.reminder_offsets();
    let occurrences = if settings.repeat {
        horizon.expand(offsets, now)
    } else {
        next_occurrences(offsets, now)
    };
    occurrences
        .into_iter()
        .map(|occurrence| occurrence.timestamp_millis())
        .collect()
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleMealRemindersUseCase {
    type Response = ScheduledMealReminders;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleMealReminders";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        let settings = ctx.repos.meal_settings.find(self.meal).await;
        let now = ctx.now();

        let mut replace = ReplaceSeriesUseCase {
            series: ReminderSeries::Meal(self.meal),
            now: now.timestamp_millis(),
            candidates: reminder_candidates(&settings, &ctx.config.repeat_horizon, &now),
        };
        let summary = replace.execute(ctx).await?;

        Ok(ScheduledMealReminders { settings, summary })
    }
}
