use clap::Parser;
use logsweep_domain::{CliOverrides, Schedule, SweepReport};
use logsweep_jobs::{JobRunner, LogRetentionJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "logsweep")]
#[command(version)]
#[command(about = "logsweep - scheduled retention sweeper for per-user logs")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Delete records older than this many days
    #[arg(long)]
    retention_days: Option<u32>,

    /// Sweep cadence, e.g. "every 24 hours"
    #[arg(long)]
    schedule: Option<Schedule>,

    /// Run a single sweep and exit
    #[arg(long)]
    once: bool,

    /// Report what would be deleted without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
        retention_days: cli.retention_days,
        schedule: cli.schedule,
        dry_run: cli.dry_run,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    if let Some(path) = cli.write_config.as_deref() {
        config.save(path)?;
        info!(path, "Configuration written");
        return Ok(());
    }

    info!("Starting logsweep v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool.clone());
    let use_cases = di::UseCases::new(&repos, &config.sweeper)?;

    if cli.once {
        let result = use_cases.sweep_expired_logs.execute().await;
        pool.close().await;
        return finish_single_run(result?);
    }

    let shutdown = CancellationToken::new();
    let retention_job =
        LogRetentionJob::new(use_cases.sweep_expired_logs.clone(), config.sweeper.schedule);

    info!(schedule = %config.sweeper.schedule, "Scheduling log retention sweeps");
    let jobs = JobRunner::new()
        .with_log_retention(retention_job)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    shutdown.cancel();

    for job in jobs {
        if let Err(e) = job.await {
            error!(error = %e, "Background job ended abnormally");
        }
    }
    pool.close().await;

    info!("Shutdown complete");
    Ok(())
}

fn finish_single_run(report: SweepReport) -> anyhow::Result<()> {
    info!(
        users = report.users_scanned(),
        deleted = report.total_deleted(),
        failed = report.users_failed(),
        threshold = %report.threshold,
        dry_run = report.dry_run,
        "Single sweep finished"
    );

    if report.is_clean() {
        return Ok(());
    }

    for (user, e) in report.failures() {
        error!(user = %user, error = %e, "User was not swept");
    }
    anyhow::bail!(
        "{} of {} users failed to sweep",
        report.users_failed(),
        report.users_scanned()
    )
}
