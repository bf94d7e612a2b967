//! logsweep domain layer
pub mod config;
pub mod errors;
pub mod log_record;
pub mod retention;
pub mod schedule;
pub mod sweep_report;
pub mod user;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use log_record::{LogRecordRef, RecordId};
pub use retention::{RetentionPolicy, DEFAULT_RETENTION_DAYS, MAX_RETENTION_DAYS};
pub use schedule::Schedule;
pub use sweep_report::{SweepReport, UserSweepOutcome, UserSweepResult};
pub use user::UserId;
