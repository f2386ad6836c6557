use crate::MealKind;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A logical group of pending triggers that are cancelled and listed together.
///
/// The notification scheduler has no grouping key of its own, membership
/// is derived from the notification content by the `tagger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderSeries {
    Meal(MealKind),
    Hydration,
}

impl ReminderSeries {
    /// Text shown to the user when talking about this series
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Meal(meal) => meal.label(),
            Self::Hydration => "Hydration",
        }
    }
}

impl Display for ReminderSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Meal(meal) => write!(f, "meal:{}", meal.key()),
            Self::Hydration => write!(f, "hydration"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidSeriesError {
    #[error("Reminder series: `{0}` is malformed")]
    Malformed(String),
}

impl FromStr for ReminderSeries {
    type Err = InvalidSeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "hydration" {
            return Ok(Self::Hydration);
        }
        s.strip_prefix("meal:")
            .and_then(|meal| meal.parse::<MealKind>().ok())
            .map(Self::Meal)
            .ok_or_else(|| InvalidSeriesError::Malformed(s.to_string()))
    }
}

impl From<MealKind> for ReminderSeries {
    fn from(meal: MealKind) -> Self {
        Self::Meal(meal)
    }
}
