use logsweep_application::use_cases::SweepExpiredLogsUseCase;
use logsweep_domain::{Schedule, SweepReport};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Background job that sweeps expired user logs on a fixed cadence.
///
///   - First tick fires immediately, so a fresh daemon sweeps at startup
///   - Sweeps never overlap; a slow run delays the next tick
///   - Default cadence: every 24 hours
pub struct LogRetentionJob {
    sweep: Arc<SweepExpiredLogsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl LogRetentionJob {
    pub fn new(sweep: Arc<SweepExpiredLogsUseCase>, schedule: Schedule) -> Self {
        Self {
            sweep,
            interval_secs: schedule.period().as_secs().max(1),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawns the sweep loop. The returned handle resolves once the job has
    /// observed cancellation and any sweep in progress has finished.
    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            retention_days = self.sweep.policy().retention_days(),
            interval_secs = self.interval_secs,
            "Starting log retention job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("LogRetentionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.sweep.execute().await {
                            Ok(report) => log_report(&report),
                            Err(e) => {
                                error!(error = %e, "Log retention sweep failed");
                            }
                        }
                    }
                }
            }
        })
    }
}

fn log_report(report: &SweepReport) {
    if report.is_clean() {
        info!(
            users = report.users_scanned(),
            deleted = report.total_deleted(),
            dry_run = report.dry_run,
            "Log retention sweep completed"
        );
    } else {
        warn!(
            users = report.users_scanned(),
            deleted = report.total_deleted(),
            failed = report.users_failed(),
            dry_run = report.dry_run,
            "Log retention sweep completed with failures"
        );
    }
}
