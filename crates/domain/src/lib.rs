mod hydration;
mod meal;
mod occurrence;
mod offsets;
mod repeat;
mod series;
mod shared;
pub mod tagger;
mod time_window;
mod trigger;

pub use hydration::{
    HydrationInterval, InvalidHydrationIntervalError, DEFAULT_HYDRATION_INTERVAL_MINUTES,
    HYDRATION_SHOTS,
};
pub use meal::{InvalidMealKindError, MealKind, MealSettings};
pub use occurrence::{next_occurrence, next_occurrences, occurrence_on};
pub use offsets::{ReminderOffsets, FIRST_GAP_MINUTES};
pub use repeat::{InvalidRepeatHorizonError, RepeatHorizon, DEFAULT_REPEAT_HORIZON_DAYS};
pub use series::{InvalidSeriesError, ReminderSeries};
pub use shared::entity::{Entity, TriggerId};
pub use shared::metadata::Metadata;
pub use time_window::{format_minute_of_day, InvalidTimeWindowError, TimeWindow, MINUTES_PER_DAY};
pub use trigger::{NotificationContent, PendingTrigger};
