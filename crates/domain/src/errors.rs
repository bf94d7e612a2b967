use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    #[error("Invalid retention period: {0} days")]
    InvalidRetention(u32),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Sweep task failed: {0}")]
    TaskFailed(String),
}
