#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use logsweep_application::ports::{LogRecordRepository, UserRepository};
use logsweep_domain::{DomainError, LogRecordRef, RecordId, UserId};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

/// In-memory stand-in for the document store: users, their log partitions,
/// failure injection and call counters.
pub struct MockLogStore {
    partitions: Arc<RwLock<BTreeMap<UserId, Vec<LogRecordRef>>>>,
    next_id: AtomicI64,
    list_should_fail: Arc<RwLock<bool>>,
    failing_finds: Arc<RwLock<HashSet<UserId>>>,
    failing_deletes: Arc<RwLock<HashSet<UserId>>>,
    panicking_finds: Arc<RwLock<HashSet<UserId>>>,
    find_delay: Arc<RwLock<Option<std::time::Duration>>>,
    find_calls: AtomicU64,
    delete_calls: AtomicU64,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockLogStore {
    pub fn new() -> Self {
        Self {
            partitions: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
            list_should_fail: Arc::new(RwLock::new(false)),
            failing_finds: Arc::new(RwLock::new(HashSet::new())),
            failing_deletes: Arc::new(RwLock::new(HashSet::new())),
            panicking_finds: Arc::new(RwLock::new(HashSet::new())),
            find_delay: Arc::new(RwLock::new(None)),
            find_calls: AtomicU64::new(0),
            delete_calls: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub async fn add_user(&self, id: &str) {
        self.partitions.write().await.entry(user(id)).or_default();
    }

    pub async fn add_log_at(&self, id: &str, timestamp: DateTime<Utc>) -> RecordId {
        let record_id = RecordId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.partitions
            .write()
            .await
            .entry(user(id))
            .or_default()
            .push(LogRecordRef {
                user_id: user(id),
                id: record_id,
                timestamp,
            });
        record_id
    }

    pub async fn add_old_log(&self, id: &str, days_ago: i64) -> RecordId {
        self.add_log_at(id, Utc::now() - Duration::days(days_ago)).await
    }

    pub async fn add_recent_log(&self, id: &str) -> RecordId {
        self.add_log_at(id, Utc::now()).await
    }

    pub async fn count_for(&self, id: &str) -> usize {
        self.partitions
            .read()
            .await
            .get(&user(id))
            .map_or(0, |records| records.len())
    }

    pub async fn timestamps_for(&self, id: &str) -> Vec<DateTime<Utc>> {
        self.partitions
            .read()
            .await
            .get(&user(id))
            .map(|records| records.iter().map(|r| r.timestamp).collect())
            .unwrap_or_default()
    }

    pub async fn total_count(&self) -> usize {
        self.partitions.read().await.values().map(Vec::len).sum()
    }

    pub async fn set_list_should_fail(&self, fail: bool) {
        *self.list_should_fail.write().await = fail;
    }

    pub async fn fail_find_for(&self, id: &str) {
        self.failing_finds.write().await.insert(user(id));
    }

    pub async fn fail_delete_for(&self, id: &str) {
        self.failing_deletes.write().await.insert(user(id));
    }

    pub async fn panic_on_find_for(&self, id: &str) {
        self.panicking_finds.write().await.insert(user(id));
    }

    pub async fn set_find_delay(&self, delay: std::time::Duration) {
        *self.find_delay.write().await = Some(delay);
    }

    pub fn find_calls(&self) -> u64 {
        self.find_calls.load(Ordering::Relaxed)
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::Relaxed)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl UserRepository for MockLogStore {
    async fn list_user_ids(&self) -> Result<Vec<UserId>, DomainError> {
        if *self.list_should_fail.read().await {
            return Err(DomainError::DatabaseError("users unavailable".to_string()));
        }
        Ok(self.partitions.read().await.keys().cloned().collect())
    }
}

#[async_trait]
impl LogRecordRepository for MockLogStore {
    async fn find_expired(
        &self,
        user_id: &UserId,
        threshold: DateTime<Utc>,
    ) -> Result<Vec<LogRecordRef>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::Relaxed);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = *self.find_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.panicking_finds.read().await.contains(user_id) {
            panic!("injected panic for {}", user_id);
        }
        if self.failing_finds.read().await.contains(user_id) {
            return Err(DomainError::DatabaseError(format!(
                "query failed for {}",
                user_id
            )));
        }

        Ok(self
            .partitions
            .read()
            .await
            .get(user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.timestamp <= threshold)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn delete_batch(&self, user_id: &UserId, ids: &[RecordId]) -> Result<u64, DomainError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);

        if self.failing_deletes.read().await.contains(user_id) {
            return Err(DomainError::DatabaseError(format!(
                "batch commit failed for {}",
                user_id
            )));
        }

        let mut partitions = self.partitions.write().await;
        let Some(records) = partitions.get_mut(user_id) else {
            return Ok(0);
        };
        let before = records.len();
        records.retain(|r| !ids.contains(&r.id));
        Ok((before - records.len()) as u64)
    }
}
