use async_trait::async_trait;
use reelgate_models::Account;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("username {0:?} is already taken")]
    DuplicateUsername(String),
    #[error("account store unavailable: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// One collection of accounts, keyed by exact username.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError>;

    /// Appends an account. Fails with [`StoreError::DuplicateUsername`] if the
    /// username is present; the check and the append are one atomic step.
    async fn insert(&self, account: Account) -> Result<(), StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}
