#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use logsweep_application::ports::{LogRecordRepository, UserRepository};
use logsweep_application::use_cases::SweepExpiredLogsUseCase;
use logsweep_domain::{DomainError, LogRecordRef, RecordId, RetentionPolicy, UserId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub struct MockLogStore {
    partitions: Arc<RwLock<BTreeMap<UserId, Vec<LogRecordRef>>>>,
    next_id: AtomicI64,
    list_calls: AtomicU64,
    list_should_fail: Arc<RwLock<bool>>,
    find_delay: Arc<RwLock<Option<std::time::Duration>>>,
}

impl MockLogStore {
    pub fn new() -> Self {
        Self {
            partitions: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
            list_calls: AtomicU64::new(0),
            list_should_fail: Arc::new(RwLock::new(false)),
            find_delay: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn add_log_at(&self, id: &str, timestamp: DateTime<Utc>) {
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
    }

    pub async fn add_old_log(&self, id: &str, days_ago: i64) {
        self.add_log_at(id, Utc::now() - Duration::days(days_ago))
            .await;
    }

    pub async fn add_recent_log(&self, id: &str) {
        self.add_log_at(id, Utc::now()).await;
    }

    pub async fn count(&self) -> usize {
        self.partitions.read().await.values().map(Vec::len).sum()
    }

    pub async fn count_for(&self, id: &str) -> usize {
        self.partitions
            .read()
            .await
            .get(&user(id))
            .map_or(0, |records| records.len())
    }

    /// Number of sweeps that reached the store.
    pub fn sweep_count(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }

    pub async fn set_list_should_fail(&self, fail: bool) {
        *self.list_should_fail.write().await = fail;
    }

    pub async fn set_find_delay(&self, delay: std::time::Duration) {
        *self.find_delay.write().await = Some(delay);
    }
}

#[async_trait]
impl UserRepository for MockLogStore {
    async fn list_user_ids(&self) -> Result<Vec<UserId>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
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
        let delay = *self.find_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
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
        let mut partitions = self.partitions.write().await;
        let Some(records) = partitions.get_mut(user_id) else {
            return Ok(0);
        };
        let before = records.len();
        records.retain(|r| !ids.contains(&r.id));
        Ok((before - records.len()) as u64)
    }
}

pub fn make_sweep(store: &Arc<MockLogStore>, retention_days: u32) -> Arc<SweepExpiredLogsUseCase> {
    Arc::new(SweepExpiredLogsUseCase::new(
        store.clone(),
        store.clone(),
        RetentionPolicy::new(retention_days).unwrap(),
    ))
}
