use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies a record inside its owner's partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub i64);

/// The retention-relevant view of a stored log record: who owns it, which
/// record it is, and when it was written. The payload stays in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecordRef {
    pub user_id: UserId,
    pub id: RecordId,
    pub timestamp: DateTime<Utc>,
}
