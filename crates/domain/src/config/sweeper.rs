use crate::retention::DEFAULT_RETENTION_DAYS;
use crate::Schedule;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweeperConfig {
    /// Records older than this many days are deleted on each run.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    #[serde(default)]
    pub schedule: Schedule,

    /// Upper bound on users swept in parallel within one run.
    #[serde(default = "default_max_concurrent_users")]
    pub max_concurrent_users: usize,

    #[serde(default)]
    pub dry_run: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            schedule: Schedule::default(),
            max_concurrent_users: default_max_concurrent_users(),
            dry_run: false,
        }
    }
}

fn default_retention_days() -> u32 {
    DEFAULT_RETENTION_DAYS
}

fn default_max_concurrent_users() -> usize {
    16
}
