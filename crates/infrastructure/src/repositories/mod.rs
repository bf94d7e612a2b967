pub mod log_record_repository;
pub mod user_repository;

pub use log_record_repository::SqliteLogRecordRepository;
pub use user_repository::SqliteUserRepository;
