//! Meal and hydration reminders on top of a local notification scheduler.
//!
//! The engine is embedded by a presentation layer which provides the
//! notification scheduler, the permission gate and the persistence store
//! through `Repos`, and drives it through `Application`.

mod telemetry;

pub use mealminder_api as api;
pub use mealminder_domain as domain;
pub use mealminder_infra as infra;

pub use mealminder_api::{Application, MealminderError, ScheduleOutcome};
pub use telemetry::{get_subscriber, init_subscriber};

/// Application backed by the in memory boundaries and configured from
/// the environment
pub async fn setup_application() -> Application {
    Application::new(mealminder_infra::setup_context().await)
}
