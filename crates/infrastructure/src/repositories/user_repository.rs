use async_trait::async_trait;
use logsweep_application::ports::UserRepository;
use logsweep_domain::{DomainError, UserId};
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    #[instrument(skip(self))]
    async fn list_user_ids(&self) -> Result<Vec<UserId>, DomainError> {
        let rows = sqlx::query_scalar::<_, String>("SELECT id FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list users");
                DomainError::DatabaseError(e.to_string())
            })?;

        rows.into_iter()
            .map(|id| {
                UserId::new(&id).inspect_err(|e| {
                    error!(error = %e, "Stored user id is not a valid user key");
                })
            })
            .collect()
    }
}
