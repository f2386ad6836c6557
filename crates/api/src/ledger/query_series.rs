use crate::{error::MealminderError, shared::usecase::UseCase};
use itertools::Itertools;
use mealminder_domain::{PendingTrigger, ReminderSeries};
use mealminder_infra::MealminderContext;

/// Lists the pending triggers of a `ReminderSeries` that fire after `now`,
/// earliest first
#[derive(Debug)]
pub struct QuerySeriesUseCase {
    pub series: ReminderSeries,
    /// Timestamp in millis
    pub now: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    SchedulerUnavailable(String),
}

impl From<UseCaseError> for MealminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::SchedulerUnavailable(reason) => Self::Failed(reason),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for QuerySeriesUseCase {
    type Response = Vec<PendingTrigger>;

    type Error = UseCaseError;

    const NAME: &'static str = "QuerySeries";

    async fn execute(&mut self, ctx: &MealminderContext) -> Result<Self::Response, Self::Error> {
        let pending = ctx
            .repos
            .notifications
            .list_pending()
            .await
            .map_err(|e| UseCaseError::SchedulerUnavailable(e.to_string()))?;

        Ok(pending
            .into_iter()
            .filter(|trigger| trigger.trigger_at > self.now && trigger.belongs_to(self.series))
            .sorted_by_key(|trigger| trigger.trigger_at)
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        ledger::CancelSeriesUseCase,
        shared::test_utils::{setup_at, utc_millis, TestContext},
    };
    use mealminder_domain::{tagger, MealKind, NotificationContent};
    use mealminder_infra::INotificationScheduler;

    #[tokio::test]
    async fn lists_future_triggers_of_series_sorted() {
        let TestContext { ctx, scheduler, .. } = setup_at(2021, 3, 10, 9, 0);
        let dinner = ReminderSeries::Meal(MealKind::Dinner);
        let content = tagger::content_for(dinner);
        for trigger_at in vec![
            utc_millis(2021, 3, 11, 19, 0),
            utc_millis(2021, 3, 10, 19, 30),
            utc_millis(2021, 3, 10, 8, 0),
        ] {
            scheduler.submit(&content, trigger_at).await.unwrap();
        }
        scheduler
            .submit(
                &tagger::content_for(ReminderSeries::Hydration),
                utc_millis(2021, 3, 10, 19, 0),
            )
            .await
            .unwrap();

        let mut usecase = QuerySeriesUseCase {
            series: dinner,
            now: ctx.sys.get_timestamp_millis(),
        };
        let triggers = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            triggers.iter().map(|t| t.trigger_at).collect::<Vec<_>>(),
            vec![utc_millis(2021, 3, 10, 19, 30), utc_millis(2021, 3, 11, 19, 0)]
        );
    }

    #[tokio::test]
    async fn classifies_foreign_triggers_by_text() {
        let TestContext { ctx, scheduler, .. } = setup_at(2021, 3, 10, 9, 0);
        let content = NotificationContent::new("Reminder: Lunch", "Remember your hydration too");
        scheduler
            .submit(&content, utc_millis(2021, 3, 10, 12, 0))
            .await
            .unwrap();

        let now = ctx.sys.get_timestamp_millis();
        let mut usecase = QuerySeriesUseCase {
            series: ReminderSeries::Meal(MealKind::Lunch),
            now,
        };
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());

        let mut usecase = QuerySeriesUseCase {
            series: ReminderSeries::Hydration,
            now,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_after_cancel() {
        let TestContext { ctx, scheduler, .. } = setup_at(2021, 3, 10, 9, 0);
        let series = ReminderSeries::Hydration;
        scheduler
            .submit(&tagger::content_for(series), utc_millis(2021, 3, 10, 11, 0))
            .await
            .unwrap();

        let mut cancel = CancelSeriesUseCase { series };
        cancel.execute(&ctx).await.unwrap();

        let mut usecase = QuerySeriesUseCase {
            series,
            now: ctx.sys.get_timestamp_millis(),
        };
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());
    }
}
