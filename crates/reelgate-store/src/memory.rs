use async_trait::async_trait;
use reelgate_models::Account;
use tokio::sync::RwLock;

use crate::repository::{AccountRepository, StoreError};

/// Accounts held in process memory for the lifetime of the server.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts.into_iter().collect()),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }

    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(StoreError::DuplicateUsername(account.username));
        }
        accounts.push(account);
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.accounts.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgate_models::Role;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(Account::new("Alice", "h1", Role::User)).await.unwrap();

        let found = repo.find_by_username("Alice").await.unwrap().unwrap();
        assert_eq!(found.username, "Alice");
        assert_eq!(found.role, Role::User);
    }

    #[tokio::test]
    async fn test_lookup_is_exact() {
        let repo = InMemoryAccountRepository::with_accounts([Account::new("John", "h", Role::User)]);

        assert!(repo.find_by_username("John").await.unwrap().is_some());
        assert!(repo.find_by_username("john").await.unwrap().is_none());
        assert!(repo.find_by_username("John ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(Account::new("Alice", "h1", Role::User)).await.unwrap();

        let err = repo
            .insert(Account::new("Alice", "h2", Role::User))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::DuplicateUsername(name) if name == "Alice"));
        assert_eq!(repo.count().await.unwrap(), 1);
        let kept = repo.find_by_username("Alice").await.unwrap().unwrap();
        assert_eq!(kept.password_hash, "h1");
    }

    #[tokio::test]
    async fn test_concurrent_registrations_with_same_name_keep_one() {
        let repo = Arc::new(InMemoryAccountRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(Account::new("Racer", format!("h{i}"), Role::User))
                        .await
                        .is_ok()
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
