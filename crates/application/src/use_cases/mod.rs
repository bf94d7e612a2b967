pub mod logs;

pub use logs::SweepExpiredLogsUseCase;
