use crate::ReminderOffsets;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt::Display};
use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// The part of the day in which a meal should happen, expressed as
/// minutes since midnight.
///
/// An `end_minute` numerically below `start_minute` means that the window
/// wraps past midnight, e.g. 23:00 - 01:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTimeWindow")]
pub struct TimeWindow {
    start_minute: u32,
    end_minute: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimeWindow {
    start_minute: u32,
    end_minute: u32,
}

impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = InvalidTimeWindowError;

    fn try_from(raw: RawTimeWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start_minute, raw.end_minute)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidTimeWindowError {
    #[error("Minute of day: {0} is outside of the range 0 - 1439")]
    MinuteOutOfRange(u32),
    #[error("{hour}:{minute} is not a valid time of day")]
    InvalidTime { hour: u32, minute: u32 },
}

fn validate_minute(minute: u32) -> Result<u32, InvalidTimeWindowError> {
    if minute < MINUTES_PER_DAY {
        Ok(minute)
    } else {
        Err(InvalidTimeWindowError::MinuteOutOfRange(minute))
    }
}

fn to_minute_of_day(hour: u32, minute: u32) -> Result<u32, InvalidTimeWindowError> {
    if hour < 24 && minute < 60 {
        Ok(hour * 60 + minute)
    } else {
        Err(InvalidTimeWindowError::InvalidTime { hour, minute })
    }
}

impl TimeWindow {
    pub fn new(start_minute: u32, end_minute: u32) -> Result<Self, InvalidTimeWindowError> {
        Ok(Self {
            start_minute: validate_minute(start_minute)?,
            end_minute: validate_minute(end_minute)?,
        })
    }

    /// Only used for windows known to be valid at compile time
    pub(crate) fn from_minutes(start_minute: u32, end_minute: u32) -> Self {
        Self {
            start_minute: start_minute % MINUTES_PER_DAY,
            end_minute: end_minute % MINUTES_PER_DAY,
        }
    }

    pub fn from_hm(
        start_hour: u32,
        start_min: u32,
        end_hour: u32,
        end_min: u32,
    ) -> Result<Self, InvalidTimeWindowError> {
        Self::new(
            to_minute_of_day(start_hour, start_min)?,
            to_minute_of_day(end_hour, end_min)?,
        )
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    pub fn with_start(&self, start_minute: u32) -> Result<Self, InvalidTimeWindowError> {
        Self::new(start_minute, self.end_minute)
    }

    pub fn with_end(&self, end_minute: u32) -> Result<Self, InvalidTimeWindowError> {
        Self::new(self.start_minute, end_minute)
    }

    pub fn wraps_midnight(&self) -> bool {
        self.end_minute < self.start_minute
    }

    pub fn span_minutes(&self) -> u32 {
        if self.wraps_midnight() {
            self.end_minute + MINUTES_PER_DAY - self.start_minute
        } else {
            self.end_minute - self.start_minute
        }
    }

    /// End of the window counted from the midnight before `start_minute`.
    /// Exceeds a day for windows that wrap past midnight.
    pub fn effective_end(&self) -> u32 {
        self.start_minute + self.span_minutes()
    }

    /// The offsets at which reminders should fire within this window
    pub fn reminder_offsets(&self) -> ReminderOffsets {
        ReminderOffsets::new(self.start_minute, self.effective_end())
    }

    /// The reminder offsets formatted as `HH:MM`, used to show the user
    /// what will be scheduled before anything is submitted
    pub fn preview(&self) -> Vec<String> {
        self.reminder_offsets().map(format_minute_of_day).collect()
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            format_minute_of_day(self.start_minute),
            format_minute_of_day(self.end_minute)
        )
    }
}

/// Minutes past a day boundary are folded back into the day
pub fn format_minute_of_day(minute: u32) -> String {
    let minute = minute % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
