use async_trait::async_trait;
use chrono::{DateTime, Utc};
use logsweep_application::ports::LogRecordRepository;
use logsweep_domain::{DomainError, LogRecordRef, RecordId, UserId};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, error, instrument, warn};

/// Keeps each `IN (...)` list well under SQLite's bound-parameter limit.
const DELETE_CHUNK_SIZE: usize = 500;

pub struct SqliteLogRecordRepository {
    pool: SqlitePool,
}

impl SqliteLogRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Rows reach here through `timestamp_ms <= threshold`, so a value chrono
    /// cannot represent is older than any threshold and clamps to the minimum.
    fn row_to_ref(user_id: &UserId, row: (i64, i64)) -> LogRecordRef {
        let (id, timestamp_ms) = row;
        let timestamp = DateTime::<Utc>::from_timestamp_millis(timestamp_ms).unwrap_or_else(|| {
            warn!(log_id = id, timestamp_ms, "Log timestamp out of range, treating as oldest");
            DateTime::<Utc>::MIN_UTC
        });

        LogRecordRef {
            user_id: user_id.clone(),
            id: RecordId(id),
            timestamp,
        }
    }
}

#[async_trait]
impl LogRecordRepository for SqliteLogRecordRepository {
    #[instrument(skip(self), fields(user = %user_id))]
    async fn find_expired(
        &self,
        user_id: &UserId,
        threshold: DateTime<Utc>,
    ) -> Result<Vec<LogRecordRef>, DomainError> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT id, timestamp_ms FROM user_logs
             WHERE user_id = ? AND timestamp_ms <= ?
             ORDER BY timestamp_ms",
        )
        .bind(user_id.as_str())
        .bind(threshold.timestamp_millis())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query expired logs");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|row| Self::row_to_ref(user_id, row))
            .collect())
    }

    #[instrument(skip(self, ids), fields(user = %user_id, batch = ids.len()))]
    async fn delete_batch(&self, user_id: &UserId, ids: &[RecordId]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let db_err = |e: sqlx::Error| {
            error!(error = %e, "Failed to delete log batch");
            DomainError::DatabaseError(e.to_string())
        };

        let mut tx = self.pool.begin().await.map_err(db_err)?;
        let mut deleted = 0u64;

        for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new("DELETE FROM user_logs WHERE user_id = ");
            builder.push_bind(user_id.as_str()).push(" AND id IN (");
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(id.0);
            }
            separated.push_unseparated(")");

            let result = builder.build().execute(&mut *tx).await.map_err(db_err)?;
            deleted += result.rows_affected();
        }

        tx.commit().await.map_err(db_err)?;
        debug!(deleted, "Log batch committed");
        Ok(deleted)
    }
}
