mod config;
mod repos;
mod system;

use chrono::prelude::*;
use chrono::LocalResult;
use chrono_tz::Tz;
pub use config::Config;
pub use repos::{
    IKVStore, IMealSettingsRepo, INotificationScheduler, IPermissionGate, InMemoryKVStore,
    InMemoryNotificationScheduler, KVMealSettingsRepo, Repos, StaticPermissionGate,
};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

#[derive(Clone)]
pub struct MealminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl MealminderContext {
    pub fn new(repos: Repos, config: Config, sys: Arc<dyn ISys>) -> Self {
        Self { repos, config, sys }
    }

    pub fn create_inmemory() -> Self {
        Self::new(Repos::create_inmemory(), Config::new(), Arc::new(RealSys {}))
    }

    /// The current time in the configured timezone
    pub fn now(&self) -> DateTime<Tz> {
        let tz = self.config.timezone;
        let millis = self.sys.get_timestamp_millis();
        match tz.timestamp_millis_opt(millis) {
            LocalResult::Single(now) => now,
            _ => {
                // Saturates at the representable range
                let utc = NaiveDateTime::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
                    NaiveDateTime::MIN
                } else {
                    NaiveDateTime::MAX
                });
                warn!(
                    "Timestamp {} from the system clock has no single instant in {}, using {} UTC",
                    millis, tz, utc
                );
                tz.from_utc_datetime(&utc)
            }
        }
    }
}

/// Will setup the infrastructure context given the environment.
///
/// All boundaries are backed by in memory implementations, a platform
/// embedding the engine builds its own `Repos` and uses `MealminderContext::new`.
pub async fn setup_context() -> MealminderContext {
    MealminderContext::create_inmemory()
}
