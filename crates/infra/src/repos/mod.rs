mod kv;
mod meal_settings;
mod notification;
mod permission;
mod shared;

pub use kv::{IKVStore, InMemoryKVStore};
pub use meal_settings::{IMealSettingsRepo, KVMealSettingsRepo};
pub use notification::{INotificationScheduler, InMemoryNotificationScheduler};
pub use permission::{IPermissionGate, StaticPermissionGate};
use std::sync::Arc;

/// The boundaries of the engine
#[derive(Clone)]
pub struct Repos {
    pub notifications: Arc<dyn INotificationScheduler>,
    pub permissions: Arc<dyn IPermissionGate>,
    pub kv_store: Arc<dyn IKVStore>,
    pub meal_settings: Arc<dyn IMealSettingsRepo>,
}

impl Repos {
    pub fn new(
        notifications: Arc<dyn INotificationScheduler>,
        permissions: Arc<dyn IPermissionGate>,
        kv_store: Arc<dyn IKVStore>,
    ) -> Self {
        Self {
            notifications,
            permissions,
            meal_settings: Arc::new(KVMealSettingsRepo::new(kv_store.clone())),
            kv_store,
        }
    }

    pub fn create_inmemory() -> Self {
        Self::new(
            Arc::new(InMemoryNotificationScheduler::new()),
            Arc::new(StaticPermissionGate::granted()),
            Arc::new(InMemoryKVStore::new()),
        )
    }
}
