use crate::{DomainError, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSweepOutcome {
    /// Records removed (or, on a dry run, matched) for this user.
    Deleted(u64),
    Failed(DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSweepResult {
    pub user_id: UserId,
    pub outcome: UserSweepOutcome,
}

impl UserSweepResult {
    pub fn deleted(user_id: UserId, count: u64) -> Self {
        Self {
            user_id,
            outcome: UserSweepOutcome::Deleted(count),
        }
    }

    pub fn failed(user_id: UserId, error: DomainError) -> Self {
        Self {
            user_id,
            outcome: UserSweepOutcome::Failed(error),
        }
    }
}

/// Summary of one sweep invocation, one entry per enumerated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub started_at: DateTime<Utc>,
    pub threshold: DateTime<Utc>,
    pub dry_run: bool,
    pub users: Vec<UserSweepResult>,
}

impl SweepReport {
    pub fn new(started_at: DateTime<Utc>, threshold: DateTime<Utc>, dry_run: bool) -> Self {
        Self {
            started_at,
            threshold,
            dry_run,
            users: Vec::new(),
        }
    }

    pub fn with_results(mut self, users: Vec<UserSweepResult>) -> Self {
        self.users = users;
        self
    }

    pub fn users_scanned(&self) -> usize {
        self.users.len()
    }

    pub fn total_deleted(&self) -> u64 {
        self.users
            .iter()
            .map(|r| match r.outcome {
                UserSweepOutcome::Deleted(n) => n,
                UserSweepOutcome::Failed(_) => 0,
            })
            .sum()
    }

    pub fn users_swept(&self) -> usize {
        self.users
            .iter()
            .filter(|r| matches!(r.outcome, UserSweepOutcome::Deleted(_)))
            .count()
    }

    pub fn users_failed(&self) -> usize {
        self.users_scanned() - self.users_swept()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&UserId, &DomainError)> {
        self.users.iter().filter_map(|r| match &r.outcome {
            UserSweepOutcome::Failed(e) => Some((&r.user_id, e)),
            UserSweepOutcome::Deleted(_) => None,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.users_failed() == 0
    }

    pub fn outcome_for(&self, user_id: &UserId) -> Option<&UserSweepOutcome> {
        self.users
            .iter()
            .find(|r| &r.user_id == user_id)
            .map(|r| &r.outcome)
    }
}
