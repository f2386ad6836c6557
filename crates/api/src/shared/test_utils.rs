use chrono::prelude::*;
use chrono_tz::UTC;
use mealminder_infra::{
    Config, InMemoryKVStore, InMemoryNotificationScheduler, MealminderContext, Repos,
    StaticPermissionGate, StaticTimeSys,
};
use std::sync::Arc;

pub struct TestContext {
    pub ctx: MealminderContext,
    pub scheduler: Arc<InMemoryNotificationScheduler>,
    pub permissions: Arc<StaticPermissionGate>,
    pub sys: Arc<StaticTimeSys>,
}

/// Context with in memory boundaries, UTC as timezone and the clock
/// frozen at the given UTC wall clock time
pub fn setup_at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> TestContext {
    let now = UTC
        .with_ymd_and_hms(year, month, day, hour, min, 0)
        .unwrap()
        .timestamp_millis();
    setup_with_scheduler(now, InMemoryNotificationScheduler::new())
}

pub fn setup_with_scheduler(now: i64, scheduler: InMemoryNotificationScheduler) -> TestContext {
    let scheduler = Arc::new(scheduler);
    let permissions = Arc::new(StaticPermissionGate::granted());
    let sys = Arc::new(StaticTimeSys::new(now));
    let repos = Repos::new(
        scheduler.clone(),
        permissions.clone(),
        Arc::new(InMemoryKVStore::new()),
    );
    let mut config = Config::new();
    config.timezone = UTC;
    config.min_lead_millis = 0;
    config.repeat_horizon = Default::default();
    config.hydration_interval = Default::default();

    TestContext {
        ctx: MealminderContext::new(repos, config, sys.clone()),
        scheduler,
        permissions,
        sys,
    }
}

pub fn utc_millis(year: i32, month: u32, day: u32, hour: u32, min: u32) -> i64 {
    UTC.with_ymd_and_hms(year, month, day, hour, min, 0)
        .unwrap()
        .timestamp_millis()
}
