use crate::{error::MealminderError, shared::usecase::UseCase};
use chrono::{prelude::*, Duration};
use chrono_tz::Tz;
use itertools::Itertools;
use mealminder_domain::{
    occurrence_on, MealKind, MealSettings, PendingTrigger, ReminderSeries, TimeWindow,
};
use mealminder_infra::MealminderContext;

/// The reminders shown for a meal: everything pending for the meal itself
/// and the hydration reminders that fire inside today's window of the meal
#[derive(Debug)]
pub struct GetMealOverviewUseCase {
    pub meal: MealKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealOverview {
    pub settings: MealSettings,
    /// Earliest trigger first
    pub reminders: Vec<PendingTrigger>,
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

/// Bounds in millis of `window` on the day of `now`. The end covers the
/// whole end minute and moves to the next day when it is not after the start.
fn todays_window(window: &TimeWindow, now: &DateTime<Tz>) -> (i64, i64) {
    let tz = now.timezone();
    let today = now.date_naive();

    let start = occurrence_on(today, window.start_minute(), &tz);
    let mut end = occurrence_on(today, window.end_minute(), &tz) + Duration::milliseconds(59_999);
    if end <= start {
        end = occurrence_on(today + Duration::days(1), window.end_minute(), &tz)
            + Duration::milliseconds(59_999);
    }
    (start.timestamp_millis(), end.timestamp_millis())
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMealOverviewUseCase {
    type Response = MealOverview;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMealOverview";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        let settings = ctx.repos.meal_settings.find(self.meal).await;
        let pending = ctx
            .repos
            .notifications
            .list_pending()
            .await
            .map_err(|e| UseCaseError::SchedulerUnavailable(e.to_string()))?;

        let (start, end) = todays_window(&settings.window, &ctx.now());
        let reminders = pending
            .into_iter()
            .filter(|trigger| {
                trigger.belongs_to(ReminderSeries::Meal(self.meal))
                    || (trigger.belongs_to(ReminderSeries::Hydration)
                        && trigger.trigger_at >= start
                        && trigger.trigger_at <= end)
            })
            .sorted_by_key(|trigger| trigger.trigger_at)
            .collect();

        Ok(MealOverview {
            settings,
            reminders,
        })
    }
}
