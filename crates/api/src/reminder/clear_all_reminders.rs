use crate::{error::MealminderError, shared::usecase::UseCase};
use mealminder_infra::MealminderContext;
use tracing::info;

/// Cancels every pending trigger in the scheduler, including triggers that
/// do not belong to any reminder series
#[derive(Debug)]
pub struct ClearAllRemindersUseCase;

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    SchedulerUnavailable(String),
}

impl From<UseCaseError> for MealminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::SchedulerUnavailable(reason) => {
                Self::Failed(format!("Failed to clear scheduled reminders: {}", reason))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ClearAllRemindersUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "ClearAllReminders";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .notifications
            .cancel_all()
            .await
            .map_err(|e| UseCaseError::SchedulerUnavailable(e.to_string()))?;
        info!("All reminders cleared");
        Ok(())
    }
}
