use crate::DomainError;
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_RETENTION_DAYS: u32 = 7;
pub const MAX_RETENTION_DAYS: u32 = 36_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    retention_days: u32,
}

impl RetentionPolicy {
    pub fn new(retention_days: u32) -> Result<Self, DomainError> {
        if retention_days == 0 || retention_days > MAX_RETENTION_DAYS {
            return Err(DomainError::InvalidRetention(retention_days));
        }
        Ok(Self { retention_days })
    }

    pub fn retention_days(&self) -> u32 {
        self.retention_days
    }

    /// Cutoff for a run starting at `now`. Records at or before it are expired.
    pub fn threshold(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DomainError> {
        now.checked_sub_signed(Duration::days(i64::from(self.retention_days)))
            .ok_or(DomainError::InvalidRetention(self.retention_days))
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}
