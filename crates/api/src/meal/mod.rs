mod get_meal_overview;
mod get_meal_settings;
mod schedule_meal_reminders;
mod set_repeat;
mod subscribers;
mod update_time_window;

pub use get_meal_overview::{GetMealOverviewUseCase, MealOverview};
pub use get_meal_settings::{GetMealSettingsUseCase, MealSettingsView};
pub use schedule_meal_reminders::{ScheduleMealRemindersUseCase, ScheduledMealReminders};
pub use set_repeat::SetRepeatUseCase;
pub use update_time_window::UpdateTimeWindowUseCase;

pub mod errors {
    pub use super::get_meal_overview::UseCaseError as GetMealOverviewError;
    pub use super::schedule_meal_reminders::UseCaseError as ScheduleMealRemindersError;
    pub use super::set_repeat::UseCaseError as SetRepeatError;
    pub use super::update_time_window::UseCaseError as UpdateTimeWindowError;
}
