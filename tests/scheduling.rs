mod helpers;

use chrono_tz::{Europe::Oslo, UTC};
use helpers::setup::{spawn_app, spawn_app_with_scheduler};
use mealminder::{
    domain::{tagger, HydrationInterval, MealKind, NotificationContent, ReminderSeries},
    infra::{INotificationScheduler, InMemoryNotificationScheduler},
    MealminderError, ScheduleOutcome,
};

fn breakfast() -> ReminderSeries {
    ReminderSeries::Meal(MealKind::Breakfast)
}

#[tokio::test]
async fn test_default_breakfast_window() {
    let t = spawn_app(Oslo, 2021, 6, 1, 7, 0);

    let outcome = t.app.schedule_meal(MealKind::Breakfast).await.unwrap();
    assert_eq!(
        outcome,
        ScheduleOutcome::Scheduled {
            series: breakfast(),
            instants: vec![
                t.millis(2021, 6, 1, 8, 0),
                t.millis(2021, 6, 1, 8, 30),
                t.millis(2021, 6, 1, 9, 30),
            ],
            rejected: 0,
            not_cancelled: 0,
        }
    );
    assert_eq!(
        outcome.message(&Oslo),
        "3 reminders scheduled for Breakfast at:\n\nTue Jun  1 2021 08:00\nTue Jun  1 2021 08:30\nTue Jun  1 2021 09:30"
    );
}

#[tokio::test]
async fn test_hydration_after_meal() {
    let t = spawn_app(UTC, 2021, 6, 1, 9, 0);

    let outcome = t
        .app
        .schedule_hydration(Some(HydrationInterval::new(60).unwrap()))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ScheduleOutcome::Scheduled {
            series: ReminderSeries::Hydration,
            instants: vec![t.millis(2021, 6, 1, 10, 0), t.millis(2021, 6, 1, 11, 0)],
            rejected: 0,
            not_cancelled: 0,
        }
    );
}

#[tokio::test]
async fn test_repeating_meal_over_horizon() {
    let t = spawn_app(UTC, 2021, 6, 1, 9, 30);
    t.app
        .update_time_window(MealKind::Breakfast, Some(8 * 60), Some(8 * 60 + 20))
        .await
        .unwrap();
    let view = t.app.set_repeat(MealKind::Breakfast, Some(true)).await.unwrap();
    assert_eq!(view.preview, vec!["08:00"]);

    let outcome = t.app.schedule_meal(MealKind::Breakfast).await.unwrap();
    assert_eq!(outcome.scheduled_count(), 13);
    match outcome {
        ScheduleOutcome::Scheduled { instants, .. } => {
            assert_eq!(instants[0], t.millis(2021, 6, 2, 8, 0));
            assert_eq!(instants[12], t.millis(2021, 6, 14, 8, 0));
        }
        other => panic!("Expected reminders to be scheduled, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_classification_without_metadata() {
    let t = spawn_app_with_scheduler(
        InMemoryNotificationScheduler::without_metadata(),
        UTC,
        (2021, 6, 1, 9, 0),
    );
    let lunch = ReminderSeries::Meal(MealKind::Lunch);

    t.app.schedule_meal(MealKind::Lunch).await.unwrap();
    t.scheduler
        .submit(
            &NotificationContent::new("Reminder: Lunch", "Don't skip your hydration"),
            t.millis(2021, 6, 1, 13, 0),
        )
        .await
        .unwrap();

    assert_eq!(t.app.pending_in_series(lunch).await.unwrap().len(), 3);
    assert_eq!(
        t.app
            .pending_in_series(ReminderSeries::Hydration)
            .await
            .unwrap()
            .len(),
        1
    );

    // Scheduling hydration replaces the foreign trigger as well
    t.app.schedule_hydration(None).await.unwrap();
    let hydration = t
        .app
        .pending_in_series(ReminderSeries::Hydration)
        .await
        .unwrap();
    assert_eq!(hydration.len(), 2);
    let title = tagger::content_for(ReminderSeries::Hydration).title;
    assert!(hydration.iter().all(|trigger| trigger.content.title == title));
    assert_eq!(t.app.pending_in_series(lunch).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_scheduling_twice_does_not_duplicate() {
    let t = spawn_app(UTC, 2021, 6, 1, 7, 0);

    let first = t.app.schedule_meal(MealKind::Dinner).await.unwrap();
    let second = t.app.schedule_meal(MealKind::Dinner).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(t.scheduler.list_pending().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_series_lifecycle() {
    let t = spawn_app(UTC, 2021, 6, 1, 7, 0);

    // Idle
    assert!(t.app.pending_in_series(breakfast()).await.unwrap().is_empty());

    // Scheduled
    t.app.schedule_meal(MealKind::Breakfast).await.unwrap();
    assert_eq!(t.app.pending_in_series(breakfast()).await.unwrap().len(), 3);

    // The first reminder fires
    t.sys.set_timestamp_millis(t.millis(2021, 6, 1, 8, 0));
    let fired = t.scheduler.fire_due(t.millis(2021, 6, 1, 8, 0));
    assert_eq!(fired.len(), 1);
    assert_eq!(
        t.app.meal_for_notification(&fired[0].content),
        MealKind::Breakfast
    );
    assert_eq!(t.app.pending_in_series(breakfast()).await.unwrap().len(), 2);

    // Cancelled
    let summary = t.app.cancel_series(breakfast()).await.unwrap();
    assert_eq!(summary.cancelled.len(), 2);
    assert!(t.app.pending_in_series(breakfast()).await.unwrap().is_empty());
    assert!(t.app.cancel_series(breakfast()).await.unwrap().cancelled.is_empty());
}

#[tokio::test]
async fn test_permission_required() {
    let t = spawn_app(UTC, 2021, 6, 1, 7, 0);
    t.permissions.set_granted(false);

    let err = t.app.schedule_meal(MealKind::Lunch).await.unwrap_err();
    assert_eq!(err, MealminderError::PermissionRequired);
    assert_eq!(
        err.to_string(),
        "Permission required: notifications permission is required to set reminders"
    );
    assert!(t.scheduler.list_pending().await.unwrap().is_empty());
    assert_eq!(t.permissions.request_count(), 1);
}

#[tokio::test]
async fn test_partial_submission() {
    let t = spawn_app(UTC, 2021, 6, 1, 7, 0);
    t.scheduler.reject_submissions_after(2);

    let outcome = t.app.schedule_meal(MealKind::Lunch).await.unwrap();
    assert_eq!(outcome.scheduled_count(), 2);
    assert!(outcome.message(&UTC).ends_with("1 could not be scheduled"));
}

#[tokio::test]
async fn test_all_submissions_rejected_is_a_failure() {
    let t = spawn_app(UTC, 2021, 6, 1, 7, 0);
    t.scheduler.reject_submissions_after(0);

    let outcome = t.app.schedule_meal(MealKind::Lunch).await.unwrap();
    assert!(matches!(outcome, ScheduleOutcome::Failed { .. }));
}

#[tokio::test]
async fn test_reminder_in_dst_gap_is_moved_forward() {
    // Clocks in Oslo skip from 02:00 to 03:00 on 2021-03-28
    let t = spawn_app(Oslo, 2021, 3, 28, 0, 0);
    t.app
        .update_time_window(MealKind::Breakfast, Some(2 * 60), Some(2 * 60 + 10))
        .await
        .unwrap();

    let outcome = t.app.schedule_meal(MealKind::Breakfast).await.unwrap();
    assert_eq!(
        outcome,
        ScheduleOutcome::Scheduled {
            series: breakfast(),
            instants: vec![t.millis(2021, 3, 28, 3, 0)],
            rejected: 0,
            not_cancelled: 0,
        }
    );
}

#[tokio::test]
async fn test_window_change_reschedules_pending_meal() {
    let t = spawn_app(UTC, 2021, 6, 1, 7, 0);
    t.app.schedule_meal(MealKind::Dinner).await.unwrap();

    let view = t
        .app
        .update_time_window(MealKind::Dinner, Some(18 * 60), None)
        .await
        .unwrap();
    assert_eq!(view.preview, vec!["18:00", "18:30", "19:30"]);

    let pending = t
        .app
        .pending_in_series(ReminderSeries::Meal(MealKind::Dinner))
        .await
        .unwrap();
    assert_eq!(
        pending.iter().map(|p| p.trigger_at).collect::<Vec<_>>(),
        vec![
            t.millis(2021, 6, 1, 18, 0),
            t.millis(2021, 6, 1, 18, 30),
            t.millis(2021, 6, 1, 19, 30),
        ]
    );
}

#[tokio::test]
async fn test_invalid_window_is_bad_client_data() {
    let t = spawn_app(UTC, 2021, 6, 1, 7, 0);

    let err = t
        .app
        .update_time_window(MealKind::Lunch, Some(24 * 60), None)
        .await
        .unwrap_err();
    assert!(matches!(err, MealminderError::BadClientData(_)));
}

#[tokio::test]
async fn test_meal_overview_and_clearing() {
    let t = spawn_app(UTC, 2021, 6, 1, 11, 0);
    t.app.schedule_meal(MealKind::Lunch).await.unwrap();
    t.app.schedule_meal(MealKind::Dinner).await.unwrap();
    // 12:00 and 13:00, both inside the lunch window
    t.app
        .schedule_hydration(Some(HydrationInterval::new(60).unwrap()))
        .await
        .unwrap();

    let overview = t.app.meal_overview(MealKind::Lunch).await.unwrap();
    assert_eq!(
        overview
            .reminders
            .iter()
            .map(|r| (r.trigger_at, r.series()))
            .collect::<Vec<_>>(),
        vec![
            (t.millis(2021, 6, 1, 12, 0), Some(ReminderSeries::Meal(MealKind::Lunch))),
            (t.millis(2021, 6, 1, 12, 0), Some(ReminderSeries::Hydration)),
            (t.millis(2021, 6, 1, 12, 30), Some(ReminderSeries::Meal(MealKind::Lunch))),
            (t.millis(2021, 6, 1, 13, 0), Some(ReminderSeries::Hydration)),
            (t.millis(2021, 6, 1, 13, 30), Some(ReminderSeries::Meal(MealKind::Lunch))),
        ]
    );

    t.app
        .cancel_reminder(overview.reminders[0].id.clone())
        .await
        .unwrap();
    assert_eq!(t.scheduler.list_pending().await.unwrap().len(), 7);

    t.app.clear_all_reminders().await.unwrap();
    assert!(t.scheduler.list_pending().await.unwrap().is_empty());
}
