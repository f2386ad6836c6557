mod cancel_reminder;
mod clear_all_reminders;
mod notification_tap;

pub use cancel_reminder::CancelReminderUseCase;
pub use clear_all_reminders::ClearAllRemindersUseCase;
pub use notification_tap::meal_for_notification;

pub mod errors {
    pub use super::cancel_reminder::UseCaseError as CancelReminderError;
    pub use super::clear_all_reminders::UseCaseError as ClearAllRemindersError;
}
