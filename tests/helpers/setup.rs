use chrono::prelude::*;
use chrono_tz::Tz;
use mealminder::{
    infra::{
        Config, InMemoryKVStore, InMemoryNotificationScheduler, MealminderContext, Repos,
        StaticPermissionGate, StaticTimeSys,
    },
    Application,
};
use std::sync::Arc;

pub struct TestApp {
    pub app: Application,
    pub scheduler: Arc<InMemoryNotificationScheduler>,
    pub permissions: Arc<StaticPermissionGate>,
    pub sys: Arc<StaticTimeSys>,
    pub tz: Tz,
}

impl TestApp {
    pub fn millis(&self, year: i32, month: u32, day: u32, hour: u32, min: u32) -> i64 {
        self.tz
            .with_ymd_and_hms(year, month, day, hour, min, 0)
            .unwrap()
            .timestamp_millis()
    }
}

pub fn spawn_app(tz: Tz, year: i32, month: u32, day: u32, hour: u32, min: u32) -> TestApp {
    spawn_app_with_scheduler(
        InMemoryNotificationScheduler::new(),
        tz,
        (year, month, day, hour, min),
    )
}

pub fn spawn_app_with_scheduler(
    scheduler: InMemoryNotificationScheduler,
    tz: Tz,
    (year, month, day, hour, min): (i32, u32, u32, u32, u32),
) -> TestApp {
    let now = tz
        .with_ymd_and_hms(year, month, day, hour, min, 0)
        .unwrap()
        .timestamp_millis();

    let scheduler = Arc::new(scheduler);
    let permissions = Arc::new(StaticPermissionGate::granted());
    let sys = Arc::new(StaticTimeSys::new(now));
    let repos = Repos::new(
        scheduler.clone(),
        permissions.clone(),
        Arc::new(InMemoryKVStore::new()),
    );

    let mut config = Config::new();
    config.timezone = tz;
    config.min_lead_millis = 0;
    config.repeat_horizon = Default::default();
    config.hydration_interval = Default::default();

    TestApp {
        app: Application::new(MealminderContext::new(repos, config, sys.clone())),
        scheduler,
        permissions,
        sys,
        tz,
    }
}
