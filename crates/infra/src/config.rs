use chrono_tz::{Tz, UTC};
use mealminder_domain::{
    HydrationInterval, RepeatHorizon, DEFAULT_HYDRATION_INTERVAL_MINUTES,
    DEFAULT_REPEAT_HORIZON_DAYS,
};
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Timezone in which meal windows are interpreted
    pub timezone: Tz,
    /// How many days ahead a repeating meal series is materialized
    pub repeat_horizon: RepeatHorizon,
    /// Interval used when the user does not pick one for hydration reminders
    pub hydration_interval: HydrationInterval,
    /// Triggers closer than this to now are not submitted.
    /// Zero means any instant strictly in the future is accepted.
    pub min_lead_millis: i64,
}

fn read_env<T: FromStr>(name: &str, default: T) -> T
where
    T: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

impl Config {
    pub fn new() -> Self {
        let timezone = match std::env::var("MEALMINDER_TIMEZONE") {
            Ok(timezone) => match timezone.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given MEALMINDER_TIMEZONE: {} is not a valid timezone, falling back to UTC.",
                        timezone
                    );
                    UTC
                }
            },
            Err(_) => UTC,
        };

        let horizon_days = read_env(
            "MEALMINDER_REPEAT_HORIZON_DAYS",
            DEFAULT_REPEAT_HORIZON_DAYS,
        );
        let repeat_horizon = RepeatHorizon::new(horizon_days).unwrap_or_else(|e| {
            warn!("{}, falling back to {} days.", e, DEFAULT_REPEAT_HORIZON_DAYS);
            RepeatHorizon::default()
        });

        let interval_minutes = read_env(
            "MEALMINDER_HYDRATION_INTERVAL_MINUTES",
            DEFAULT_HYDRATION_INTERVAL_MINUTES,
        );
        let hydration_interval = HydrationInterval::new(interval_minutes).unwrap_or_else(|e| {
            warn!(
                "{}, falling back to {} minutes.",
                e, DEFAULT_HYDRATION_INTERVAL_MINUTES
            );
            HydrationInterval::default()
        });

        let min_lead_seconds = read_env::<u32>("MEALMINDER_MIN_LEAD_SECONDS", 0);

        Self {
            timezone,
            repeat_horizon,
            hydration_interval,
            min_lead_millis: min_lead_seconds as i64 * 1000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
