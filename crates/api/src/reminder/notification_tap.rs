use mealminder_domain::{tagger, MealKind, NotificationContent};

/// The meal a delivered notification is about, used to open the follow-up
/// for that meal when the user taps it. Only the title is looked at and
/// anything without a meal label in it falls back to breakfast.
pub fn meal_for_notification(content: &NotificationContent) -> MealKind {
    tagger::meal_in_title(&content.title).unwrap_or(MealKind::Breakfast)
}
