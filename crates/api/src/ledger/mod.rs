//! Keeps the pending triggers of every `ReminderSeries` in the notification
//! scheduler free of duplicates.
//!
//! Nothing is cached between calls, every use case lists the pending set
//! before acting on it.

mod cancel_series;
mod query_series;
mod replace_series;
mod summary;

pub use cancel_series::CancelSeriesUseCase;
pub use query_series::QuerySeriesUseCase;
pub use replace_series::ReplaceSeriesUseCase;
pub use summary::{
    CancelSummary, RejectedOperation, Rejection, ScheduleOutcome, ScheduleSummary,
    ScheduledTrigger,
};

pub mod errors {
    pub use super::cancel_series::UseCaseError as CancelSeriesError;
    pub use super::query_series::UseCaseError as QuerySeriesError;
    pub use super::replace_series::UseCaseError as ReplaceSeriesError;
}
