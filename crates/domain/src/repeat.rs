use crate::occurrence_on;
use chrono::{prelude::*, Duration};
use chrono_tz::Tz;
use thiserror::Error;

pub const DEFAULT_REPEAT_HORIZON_DAYS: u32 = 14;

/// Number of days a repeating reminder series is materialized for.
///
/// The notification scheduler has no recurring trigger that can be
/// relied upon, so a repeating series is submitted as one trigger per
/// occurrence within the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatHorizon {
    days: u32,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidRepeatHorizonError {
    #[error("The repeat horizon must cover at least one day")]
    Empty,
}

impl RepeatHorizon {
    pub fn new(days: u32) -> Result<Self, InvalidRepeatHorizonError> {
        if days == 0 {
            return Err(InvalidRepeatHorizonError::Empty);
        }
        Ok(Self { days })
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Every offset on every day of the horizon starting today, keeping only
    /// instants strictly after `now`. Occurrences that have already passed
    /// today are dropped and not moved to a later day.
    pub fn expand(
        &self,
        offsets: impl IntoIterator<Item = u32>,
        now: &DateTime<Tz>,
    ) -> Vec<DateTime<Tz>> {
        let offsets = offsets.into_iter().collect::<Vec<_>>();
        let tz = now.timezone();
        let today = now.date_naive();

        let mut occurrences = (0..self.days)
            .flat_map(|day| {
                let date = today + Duration::days(day as i64);
                offsets
                    .iter()
                    .map(move |offset| occurrence_on(date, *offset, &tz))
            })
            .filter(|occurrence| occurrence > now)
            .collect::<Vec<_>>();
        occurrences.sort();
        occurrences
    }
}

impl Default for RepeatHorizon {
    fn default() -> Self {
        Self {
            days: DEFAULT_REPEAT_HORIZON_DAYS,
        }
    }
}
