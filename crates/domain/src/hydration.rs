use chrono::{prelude::*, Duration};
use chrono_tz::Tz;
use thiserror::Error;

pub const DEFAULT_HYDRATION_INTERVAL_MINUTES: u32 = 120;
/// Number of hydration reminders scheduled at a time
pub const HYDRATION_SHOTS: u32 = 2;

/// Minutes between hydration reminders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrationInterval(u32);

#[derive(Error, Debug, PartialEq)]
pub enum InvalidHydrationIntervalError {
    #[error("The hydration interval must be a positive number of minutes")]
    NotPositive,
}

impl HydrationInterval {
    pub fn new(minutes: u32) -> Result<Self, InvalidHydrationIntervalError> {
        if minutes == 0 {
            return Err(InvalidHydrationIntervalError::NotPositive);
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// `now + interval`, `now + 2 * interval`, ...
    pub fn instants_after(&self, now: &DateTime<Tz>) -> Vec<DateTime<Tz>> {
        (1..=HYDRATION_SHOTS)
            .map(|shot| *now + Duration::minutes(i64::from(shot) * i64::from(self.0)))
            .collect()
    }
}

impl Default for HydrationInterval {
    fn default() -> Self {
        Self(DEFAULT_HYDRATION_INTERVAL_MINUTES)
    }
}
