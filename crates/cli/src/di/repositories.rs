use logsweep_infrastructure::repositories::{SqliteLogRecordRepository, SqliteUserRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub user: Arc<SqliteUserRepository>,
    pub log_record: Arc<SqliteLogRecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user: Arc::new(SqliteUserRepository::new(pool.clone())),
            log_record: Arc::new(SqliteLogRecordRepository::new(pool)),
        }
    }
}
