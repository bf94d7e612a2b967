use async_trait::async_trait;
use logsweep_domain::{DomainError, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user currently known to the store.
    async fn list_user_ids(&self) -> Result<Vec<UserId>, DomainError>;
}
