mod schedule_hydration;

pub use schedule_hydration::ScheduleHydrationRemindersUseCase;

pub mod errors {
    pub use super::schedule_hydration::UseCaseError as ScheduleHydrationRemindersError;
}
