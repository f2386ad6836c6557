use thiserror::Error;

/// Failures as they are presented to the user
#[derive(Error, Debug, PartialEq)]
pub enum MealminderError {
    #[error("Permission required: notifications permission is required to set reminders")]
    PermissionRequired,
    #[error("Failed: {0}")]
    Failed(String),
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("Internal error")]
    InternalError,
}
