use super::subscribers::RescheduleMealOnSettingsChanged;
use crate::{
    error::MealminderError,
    shared::usecase::{Subscriber, UseCase},
};
use mealminder_domain::{InvalidTimeWindowError, MealKind, MealSettings};
use mealminder_infra::MealminderContext;
use tracing::error;

/// Moves the start and/or the end of a meal's time window.
/// Fields that are `None` keep their saved value.
#[derive(Debug)]
pub struct UpdateTimeWindowUseCase {
    pub meal: MealKind,
    pub start_minute: Option<u32>,
    pub end_minute: Option<u32>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidTimeWindow(InvalidTimeWindowError),
    StorageError,
}

impl From<UseCaseError> for MealminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTimeWindow(e) => Self::BadClientData(format!(
                "Bad time window provided. Error message: {}",
                e
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateTimeWindowUseCase {
    type Response = MealSettings;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateTimeWindow";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        let mut settings = ctx.repos.meal_settings.find(self.meal).await;

        let mut window = settings.window;
        if let Some(start_minute) = self.start_minute {
            window = window
                .with_start(start_minute)
                .map_err(UseCaseError::InvalidTimeWindow)?;
        }
        if let Some(end_minute) = self.end_minute {
            window = window
                .with_end(end_minute)
                .map_err(UseCaseError::InvalidTimeWindow)?;
        }

        ctx.repos
            .meal_settings
            .save_window(self.meal, &window)
            .await
            .map_err(|e| {
                error!("Unable to save the time window of {}. Err: {:?}", self.meal, e);
                UseCaseError::StorageError
            })?;

        settings.window = window;
        Ok(settings)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RescheduleMealOnSettingsChanged)]
    }
}
