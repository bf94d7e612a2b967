use async_trait::async_trait;
use chrono::{DateTime, Utc};
use logsweep_domain::{DomainError, LogRecordRef, RecordId, UserId};

#[async_trait]
pub trait LogRecordRepository: Send + Sync {
    /// Records in `user_id`'s partition with `timestamp <= threshold`.
    async fn find_expired(
        &self,
        user_id: &UserId,
        threshold: DateTime<Utc>,
    ) -> Result<Vec<LogRecordRef>, DomainError>;

    /// Deletes the given records as one atomic batch, returning how many were
    /// removed. Ids that do not belong to `user_id` are left untouched.
    async fn delete_batch(&self, user_id: &UserId, ids: &[RecordId])
        -> Result<u64, DomainError>;
}
