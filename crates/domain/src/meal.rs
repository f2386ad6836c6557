use crate::TimeWindow;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The meals a user can be reminded about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealKind {
    /// All `MealKind`s in the order they happen during a day.
    /// Classification of notification text also tries them in this order.
    pub const ALL: [MealKind; 3] = [MealKind::Breakfast, MealKind::Lunch, MealKind::Dinner];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }

    /// The window used until the user has picked one
    pub fn default_window(&self) -> TimeWindow {
        match self {
            Self::Breakfast => TimeWindow::from_minutes(8 * 60, 10 * 60),
            Self::Lunch => TimeWindow::from_minutes(12 * 60, 14 * 60),
            Self::Dinner => TimeWindow::from_minutes(19 * 60, 21 * 60),
        }
    }
}

impl Display for MealKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidMealKindError {
    #[error("Meal: `{0}` is not one of breakfast, lunch or dinner")]
    Unknown(String),
}

impl FromStr for MealKind {
    type Err = InvalidMealKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|meal| meal.key() == key)
            .copied()
            .ok_or_else(|| InvalidMealKindError::Unknown(s.to_string()))
    }
}

/// Everything the user has configured for a single meal
#[derive(Debug, Clone, PartialEq)]
pub struct MealSettings {
    pub meal: MealKind,
    pub window: TimeWindow,
    /// Whether the reminders should be materialized for the coming days
    /// instead of just the next occurrence of every offset
    pub repeat: bool,
}

impl MealSettings {
    pub fn defaults(meal: MealKind) -> Self {
        Self {
            meal,
            window: meal.default_window(),
            repeat: false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_meal_keys() {
        assert_eq!("lunch".parse::<MealKind>(), Ok(MealKind::Lunch));
        assert_eq!(" Dinner ".parse::<MealKind>(), Ok(MealKind::Dinner));
        assert_eq!("BREAKFAST".parse::<MealKind>(), Ok(MealKind::Breakfast));
        assert!("brunch".parse::<MealKind>().is_err());
    }

    #[test]
    fn default_windows() {
        let windows = MealKind::ALL
            .iter()
            .map(|meal| {
                let window = meal.default_window();
                (window.start_minute(), window.end_minute())
            })
            .collect::<Vec<_>>();
        assert_eq!(windows, vec![(480, 600), (720, 840), (1140, 1260)]);
    }

    #[test]
    fn default_settings_do_not_repeat() {
        for meal in MealKind::ALL.iter() {
            assert!(!MealSettings::defaults(*meal).repeat);
        }
    }
}
