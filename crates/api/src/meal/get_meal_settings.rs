use crate::shared::usecase::UseCase;
use mealminder_domain::MealSettings;
use mealminder_infra::MealminderContext;
use std::convert::Infallible;

/// Loads the settings of every meal together with the reminder times
/// each window would produce
#[derive(Debug)]
pub struct GetMealSettingsUseCase;

#[derive(Debug, Clone, PartialEq)]
pub struct MealSettingsView {
    pub settings: MealSettings,
    /// Reminder offsets of the window formatted as `HH:MM`
    pub preview: Vec<String>,
}

impl MealSettingsView {
    pub fn new(settings: MealSettings) -> Self {
        let preview = settings.window.preview();
        Self { settings, preview }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMealSettingsUseCase {
    type Response = Vec<MealSettingsView>;

    type Error = Infallible;

    const NAME: &'static str = "GetMealSettings";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        let settings = ctx.repos.meal_settings.find_all().await;
        Ok(settings.into_iter().map(MealSettingsView::new).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{setup_at, TestContext};
    use mealminder_domain::{MealKind, TimeWindow};

    #[tokio::test]
    async fn lists_every_meal_with_preview() {
        let TestContext { ctx, .. } = setup_at(2021, 3, 10, 7, 0);
        ctx.repos
            .meal_settings
            .save_window(MealKind::Lunch, &TimeWindow::from_hm(12, 0, 12, 20).unwrap())
            .await
            .unwrap();

        let views = GetMealSettingsUseCase.execute(&ctx).await.unwrap();
        assert_eq!(views.len(), 3);
        assert_eq!(views[0].settings.meal, MealKind::Breakfast);
        assert_eq!(views[0].preview, vec!["08:00", "08:30", "09:30"]);
        assert_eq!(views[1].preview, vec!["12:00"]);
        assert_eq!(views[2].preview, vec!["19:00", "19:30", "20:30"]);
    }
}
