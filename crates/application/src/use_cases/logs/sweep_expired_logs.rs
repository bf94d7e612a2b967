use crate::ports::{LogRecordRepository, UserRepository};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use logsweep_domain::{
    DomainError, RecordId, RetentionPolicy, SweepReport, UserId, UserSweepResult,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const DEFAULT_MAX_CONCURRENT_USERS: usize = 16;

/// Use case: delete every user's log records older than the retention window.
///
/// Users are swept independently and concurrently. A failing user is recorded
/// in the report and never stops the others; only a failure to list users
/// fails the whole run.
pub struct SweepExpiredLogsUseCase {
    user_repo: Arc<dyn UserRepository>,
    log_repo: Arc<dyn LogRecordRepository>,
    policy: RetentionPolicy,
    max_concurrent_users: usize,
    dry_run: bool,
}

impl SweepExpiredLogsUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        log_repo: Arc<dyn LogRecordRepository>,
        policy: RetentionPolicy,
    ) -> Self {
        Self {
            user_repo,
            log_repo,
            policy,
            max_concurrent_users: DEFAULT_MAX_CONCURRENT_USERS,
            dry_run: false,
        }
    }

    pub fn with_max_concurrent_users(mut self, limit: usize) -> Self {
        self.max_concurrent_users = limit.max(1);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    pub async fn execute(&self) -> Result<SweepReport, DomainError> {
        self.execute_at(Utc::now()).await
    }

    pub async fn execute_at(&self, now: DateTime<Utc>) -> Result<SweepReport, DomainError> {
        let threshold = self.policy.threshold(now)?;
        let report = SweepReport::new(now, threshold, self.dry_run);

        let users = self.user_repo.list_user_ids().await?;
        if users.is_empty() {
            info!("No users found, nothing to sweep");
            return Ok(report);
        }

        let dry_run = self.dry_run;
        let mut results: Vec<UserSweepResult> = stream::iter(users)
            .map(|user_id| {
                let log_repo = Arc::clone(&self.log_repo);
                let task_user = user_id.clone();
                let handle = tokio::spawn(async move {
                    sweep_user(log_repo.as_ref(), &task_user, threshold, dry_run).await
                });

                async move {
                    match handle.await {
                        Ok(Ok(deleted)) => UserSweepResult::deleted(user_id, deleted),
                        Ok(Err(e)) => {
                            warn!(user = %user_id, error = %e, "User log sweep failed");
                            UserSweepResult::failed(user_id, e)
                        }
                        Err(e) => {
                            error!(user = %user_id, error = %e, "User log sweep task panicked");
                            UserSweepResult::failed(user_id, DomainError::TaskFailed(e.to_string()))
                        }
                    }
                }
            })
            .buffer_unordered(self.max_concurrent_users)
            .collect()
            .await;

        results.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        let report = report.with_results(results);

        info!(
            users = report.users_scanned(),
            deleted = report.total_deleted(),
            failed = report.users_failed(),
            retention_days = self.policy.retention_days(),
            dry_run,
            "Expired logs swept"
        );
        Ok(report)
    }
}

async fn sweep_user(
    log_repo: &dyn LogRecordRepository,
    user_id: &UserId,
    threshold: DateTime<Utc>,
    dry_run: bool,
) -> Result<u64, DomainError> {
    let expired = log_repo.find_expired(user_id, threshold).await?;
    if expired.is_empty() {
        return Ok(0);
    }

    if dry_run {
        debug!(user = %user_id, matched = expired.len(), "Dry run, skipping delete");
        return Ok(expired.len() as u64);
    }

    let ids: Vec<RecordId> = expired.iter().map(|r| r.id).collect();
    let deleted = log_repo.delete_batch(user_id, &ids).await?;
    debug!(user = %user_id, deleted, "Expired logs deleted");
    Ok(deleted)
}
