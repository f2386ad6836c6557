mod kv;

pub use kv::KVMealSettingsRepo;
use mealminder_domain::{MealKind, MealSettings, TimeWindow};

/// The time window and repeat flag of every meal.
///
/// Lookups never fail: settings that were never saved, or cannot be read
/// back, resolve to the defaults of the meal.
#[async_trait::async_trait]
pub trait IMealSettingsRepo: Send + Sync {
    async fn find(&self, meal: MealKind) -> MealSettings;
    async fn find_all(&self) -> Vec<MealSettings> {
        let mut settings = Vec::with_capacity(MealKind::ALL.len());
        for meal in MealKind::ALL.iter() {
            settings.push(self.find(*meal).await);
        }
        settings
    }
    async fn save_window(&self, meal: MealKind, window: &TimeWindow) -> anyhow::Result<()>;
    async fn save_repeat(&self, meal: MealKind, repeat: bool) -> anyhow::Result<()>;
}
