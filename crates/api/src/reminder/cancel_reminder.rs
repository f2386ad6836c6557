use crate::{error::MealminderError, shared::usecase::UseCase};
use mealminder_domain::TriggerId;
use mealminder_infra::MealminderContext;
use tracing::info;

/// Cancels a single pending trigger, whatever series it belongs to
#[derive(Debug)]
pub struct CancelReminderUseCase {
    pub trigger_id: TriggerId,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    SchedulerUnavailable(String),
}

impl From<UseCaseError> for MealminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::SchedulerUnavailable(reason) => {
                Self::Failed(format!("Failed to cancel reminder: {}", reason))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelReminderUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "CancelReminder";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .notifications
            .cancel(&self.trigger_id)
            .await
            .map_err(|e| UseCaseError::SchedulerUnavailable(e.to_string()))?;
        info!("Cancelled reminder {}", self.trigger_id);
        Ok(())
    }
}
