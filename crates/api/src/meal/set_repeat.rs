use super::subscribers::RescheduleMealOnSettingsChanged;
use crate::{
    error::MealminderError,
    shared::usecase::{Subscriber, UseCase},
};
use mealminder_domain::{MealKind, MealSettings};
use mealminder_infra::MealminderContext;
use tracing::error;

/// Sets the repeat flag of a meal, or flips it when `enabled` is `None`
#[derive(Debug)]
pub struct SetRepeatUseCase {
    pub meal: MealKind,
    pub enabled: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for MealminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetRepeatUseCase {
    type Response = MealSettings;

    type Error = UseCaseError;

    const NAME: &'static str = "SetRepeat";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        let mut settings = ctx.repos.meal_settings.find(self.meal).await;
        let repeat = self.enabled.unwrap_or(!settings.repeat);

        ctx.repos
            .meal_settings
            .save_repeat(self.meal, repeat)
            .await
            .map_err(|e| {
                error!("Unable to save the repeat flag of {}. Err: {:?}", self.meal, e);
                UseCaseError::StorageError
            })?;

        settings.repeat = repeat;
        Ok(settings)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RescheduleMealOnSettingsChanged)]
    }
}
