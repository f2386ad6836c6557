use super::{
    schedule_meal_reminders::ScheduleMealRemindersUseCase, set_repeat::SetRepeatUseCase,
    update_time_window::UpdateTimeWindowUseCase,
};
use crate::{
    ledger::QuerySeriesUseCase,
    shared::usecase::{execute, Subscriber},
};
use mealminder_domain::{MealSettings, ReminderSeries};
use mealminder_infra::MealminderContext;
use tracing::info;

pub struct RescheduleMealOnSettingsChanged;

/// Meals without pending reminders stay unscheduled
async fn reschedule_if_scheduled(settings: &MealSettings, ctx: &MealminderContext) {
    let query = QuerySeriesUseCase {
        series: ReminderSeries::Meal(settings.meal),
        now: ctx.sys.get_timestamp_millis(),
    };
    let pending = match execute(query, ctx).await {
        Ok(pending) => pending,
        Err(_) => return,
    };
    if pending.is_empty() {
        return;
    }

    info!(
        "Settings of {} changed while {} reminders are pending, rescheduling",
        settings.meal,
        pending.len()
    );
    let schedule = ScheduleMealRemindersUseCase {
        meal: settings.meal,
    };
    // Sideeffect, ignore result
    let _ = execute(schedule, ctx).await;
}

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateTimeWindowUseCase> for RescheduleMealOnSettingsChanged {
    async fn notify(&self, settings: &MealSettings, ctx: &MealminderContext) {
        reschedule_if_scheduled(settings, ctx).await;
    }
}

#[async_trait::async_trait(?Send)]
impl Subscriber<SetRepeatUseCase> for RescheduleMealOnSettingsChanged {
    async fn notify(&self, settings: &MealSettings, ctx: &MealminderContext) {
        reschedule_if_scheduled(settings, ctx).await;
    }
}
