mod error;
mod hydration;
mod ledger;
mod meal;
mod reminder;
mod shared;

pub use error::MealminderError;
pub use hydration::{errors as hydration_errors, ScheduleHydrationRemindersUseCase};
pub use ledger::{
    errors as ledger_errors, CancelSeriesUseCase, CancelSummary, QuerySeriesUseCase,
    RejectedOperation, Rejection, ReplaceSeriesUseCase, ScheduleOutcome, ScheduleSummary,
    ScheduledTrigger,
};
pub use meal::{
    errors as meal_errors, GetMealOverviewUseCase, GetMealSettingsUseCase, MealOverview,
    MealSettingsView, ScheduleMealRemindersUseCase, ScheduledMealReminders, SetRepeatUseCase,
    UpdateTimeWindowUseCase,
};
pub use reminder::{
    errors as reminder_errors, meal_for_notification, CancelReminderUseCase,
    ClearAllRemindersUseCase,
};
pub use shared::usecase::{execute, Subscriber, UseCase};

use mealminder_domain::{
    HydrationInterval, MealKind, NotificationContent, PendingTrigger, ReminderSeries, TriggerId,
};
use mealminder_infra::MealminderContext;

/// Entry point for a presentation layer.
///
/// Every operation runs its use case through `execute` and converts the
/// failure into the `MealminderError` shown to the user.
#[derive(Clone)]
pub struct Application {
    context: MealminderContext,
}

impl Application {
    pub fn new(context: MealminderContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &MealminderContext {
        &self.context
    }

    pub async fn meal_settings(&self) -> Vec<MealSettingsView> {
        match execute(GetMealSettingsUseCase, &self.context).await {
            Ok(settings) => settings,
            Err(never) => match never {},
        }
    }

    pub async fn update_time_window(
        &self,
        meal: MealKind,
        start_minute: Option<u32>,
        end_minute: Option<u32>,
    ) -> Result<MealSettingsView, MealminderError> {
        let usecase = UpdateTimeWindowUseCase {
            meal,
            start_minute,
            end_minute,
        };
        execute(usecase, &self.context)
            .await
            .map(MealSettingsView::new)
            .map_err(MealminderError::from)
    }

    /// Toggles the repeat flag when `enabled` is `None`
    pub async fn set_repeat(
        &self,
        meal: MealKind,
        enabled: Option<bool>,
    ) -> Result<MealSettingsView, MealminderError> {
        execute(SetRepeatUseCase { meal, enabled }, &self.context)
            .await
            .map(MealSettingsView::new)
            .map_err(MealminderError::from)
    }

    pub async fn schedule_meal(&self, meal: MealKind) -> Result<ScheduleOutcome, MealminderError> {
        execute(ScheduleMealRemindersUseCase { meal }, &self.context)
            .await
            .map(|res| res.summary.outcome())
            .map_err(MealminderError::from)
    }

    pub async fn schedule_hydration(
        &self,
        interval: Option<HydrationInterval>,
    ) -> Result<ScheduleOutcome, MealminderError> {
        execute(ScheduleHydrationRemindersUseCase { interval }, &self.context)
            .await
            .map(|summary| summary.outcome())
            .map_err(MealminderError::from)
    }

    pub async fn cancel_series(
        &self,
        series: ReminderSeries,
    ) -> Result<CancelSummary, MealminderError> {
        execute(CancelSeriesUseCase { series }, &self.context)
            .await
            .map_err(MealminderError::from)
    }

    pub async fn pending_in_series(
        &self,
        series: ReminderSeries,
    ) -> Result<Vec<PendingTrigger>, MealminderError> {
        let usecase = QuerySeriesUseCase {
            series,
            now: self.context.sys.get_timestamp_millis(),
        };
        execute(usecase, &self.context)
            .await
            .map_err(MealminderError::from)
    }

    pub async fn meal_overview(&self, meal: MealKind) -> Result<MealOverview, MealminderError> {
        execute(GetMealOverviewUseCase { meal }, &self.context)
            .await
            .map_err(MealminderError::from)
    }

    pub async fn cancel_reminder(&self, trigger_id: TriggerId) -> Result<(), MealminderError> {
        execute(CancelReminderUseCase { trigger_id }, &self.context)
            .await
            .map_err(MealminderError::from)
    }

    pub async fn clear_all_reminders(&self) -> Result<(), MealminderError> {
        execute(ClearAllRemindersUseCase, &self.context)
            .await
            .map_err(MealminderError::from)
    }

    pub fn meal_for_notification(&self, content: &NotificationContent) -> MealKind {
        meal_for_notification(content)
    }
}
