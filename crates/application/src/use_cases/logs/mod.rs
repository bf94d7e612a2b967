pub mod sweep_expired_logs;

pub use sweep_expired_logs::SweepExpiredLogsUseCase;
