//! Marks notification content with the `ReminderSeries` it belongs to and
//! reads that mark back from pending triggers.
//!
//! Schedulers are only guaranteed to round trip the title and body of a
//! notification, so the marker is plain text: the meal label for meal
//! reminders and the word `hydration` for hydration reminders. Matching is
//! a case insensitive substring search, which means a label that shows up
//! inside unrelated text is classified as that meal as well.
//!
//! Content created here also carries the series in its metadata. When a
//! scheduler round trips metadata that entry wins over the text markers.

use crate::{MealKind, NotificationContent, ReminderSeries};

pub const HYDRATION_KEYWORD: &str = "hydration";
pub const SERIES_METADATA_KEY: &str = "series";

pub fn content_for(series: ReminderSeries) -> NotificationContent {
    let mut content = match series {
        ReminderSeries::Meal(meal) => NotificationContent::new(
            format!("Reminder: {}", meal.label()),
            format!("It's time for your {}!", meal.label()),
        ),
        ReminderSeries::Hydration => NotificationContent::new(
            "Hydration Reminder",
            "This is your periodic water reminder. Stay hydrated!",
        ),
    };
    content
        .metadata
        .insert(SERIES_METADATA_KEY.into(), series.to_string());
    content
}

pub fn classify(content: &NotificationContent) -> Option<ReminderSeries> {
    let tagged = content
        .metadata
        .get(SERIES_METADATA_KEY)
        .and_then(|series| series.parse::<ReminderSeries>().ok());
    match tagged {
        Some(series) => Some(series),
        None => classify_text(&content.title, &content.body),
    }
}

/// Whether `content` belongs to `series`.
///
/// Unlike `classify`, meal membership is not exclusive: untagged text that
/// mentions several meal labels belongs to each of those meals.
pub fn matches(content: &NotificationContent, series: ReminderSeries) -> bool {
    let tagged = content
        .metadata
        .get(SERIES_METADATA_KEY)
        .and_then(|tag| tag.parse::<ReminderSeries>().ok());
    if let Some(tagged) = tagged {
        return tagged == series;
    }

    let title = content.title.to_lowercase();
    let body = content.body.to_lowercase();
    let mentions = |text: &str| title.contains(text) || body.contains(text);

    if mentions(HYDRATION_KEYWORD) {
        return series == ReminderSeries::Hydration;
    }
    match series {
        ReminderSeries::Meal(meal) => mentions(&meal.label().to_lowercase()),
        ReminderSeries::Hydration => false,
    }
}

/// Hydration wins over any meal label in the same text
pub fn classify_text(title: &str, body: &str) -> Option<ReminderSeries> {
    let title = title.to_lowercase();
    let body = body.to_lowercase();

    if title.contains(HYDRATION_KEYWORD) || body.contains(HYDRATION_KEYWORD) {
        return Some(ReminderSeries::Hydration);
    }
    MealKind::ALL
        .iter()
        .find(|meal| {
            let label = meal.label().to_lowercase();
            title.contains(&label) || body.contains(&label)
        })
        .map(|meal| ReminderSeries::Meal(*meal))
}

/// The first meal whose label is part of `title`
pub fn meal_in_title(title: &str) -> Option<MealKind> {
    let title = title.to_lowercase();
    MealKind::ALL
        .iter()
        .find(|meal| title.contains(&meal.label().to_lowercase()))
        .copied()
}
