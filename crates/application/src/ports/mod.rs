mod log_record_repository;
mod user_repository;

pub use log_record_repository::LogRecordRepository;
pub use user_repository::UserRepository;
