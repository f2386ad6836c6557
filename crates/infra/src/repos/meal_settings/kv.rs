use super::IMealSettingsRepo;
use crate::repos::kv::IKVStore;
use mealminder_domain::{MealKind, MealSettings, TimeWindow};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

/// Stores every setting of a meal under its own key as a json value
pub struct KVMealSettingsRepo {
    store: Arc<dyn IKVStore>,
}

impl KVMealSettingsRepo {
    pub fn new(store: Arc<dyn IKVStore>) -> Self {
        Self { store }
    }

    fn window_key(meal: MealKind) -> String {
        format!("mealminder.window.{}", meal.key())
    }

    fn repeat_key(meal: MealKind) -> String {
        format!("mealminder.repeat.{}", meal.key())
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Unable to read {} from the store. Err: {:?}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed value: {} for {}. Err: {:?}", raw, key, e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl IMealSettingsRepo for KVMealSettingsRepo {
    async fn find(&self, meal: MealKind) -> MealSettings {
        let defaults = MealSettings::defaults(meal);
        let window = self
            .read::<TimeWindow>(&Self::window_key(meal))
            .await
            .unwrap_or(defaults.window);
        let repeat = self
            .read::<bool>(&Self::repeat_key(meal))
            .await
            .unwrap_or(defaults.repeat);

        MealSettings {
            meal,
            window,
            repeat,
        }
    }

    async fn save_window(&self, meal: MealKind, window: &TimeWindow) -> anyhow::Result<()> {
        let value = serde_json::to_string(window)?;
        self.store.set(&Self::window_key(meal), &value).await
    }

    async fn save_repeat(&self, meal: MealKind, repeat: bool) -> anyhow::Result<()> {
        let value = serde_json::to_string(&repeat)?;
        self.store.set(&Self::repeat_key(meal), &value).await
    }
}
