use super::Repositories;
use logsweep_application::use_cases::SweepExpiredLogsUseCase;
use logsweep_domain::config::SweeperConfig;
use logsweep_domain::{DomainError, RetentionPolicy};
use std::sync::Arc;

pub struct UseCases {
    pub sweep_expired_logs: Arc<SweepExpiredLogsUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, sweeper: &SweeperConfig) -> Result<Self, DomainError> {
        let policy = RetentionPolicy::new(sweeper.retention_days)?;

        Ok(Self {
            sweep_expired_logs: Arc::new(
                SweepExpiredLogsUseCase::new(
                    repos.user.clone(),
                    repos.log_record.clone(),
                    policy,
                )
                .with_max_concurrent_users(sweeper.max_concurrent_users)
                .with_dry_run(sweeper.dry_run),
            ),
        })
    }
}
