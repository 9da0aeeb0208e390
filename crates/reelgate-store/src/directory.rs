use std::sync::Arc;

use reelgate_models::AccountKind;

use crate::memory::InMemoryAccountRepository;
use crate::repository::AccountRepository;

/// The two account collections: customers and administrators.
#[derive(Clone)]
pub struct AccountDirectory {
    customers: Arc<dyn AccountRepository>,
    admins: Arc<dyn AccountRepository>,
}

impl AccountDirectory {
    pub fn new(customers: Arc<dyn AccountRepository>, admins: Arc<dyn AccountRepository>) -> Self {
        Self { customers, admins }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(InMemoryAccountRepository::new()),
        )
    }

    pub fn collection(&self, kind: AccountKind) -> &Arc<dyn AccountRepository> {
        match kind {
            AccountKind::Customer => &self.customers,
            AccountKind::Admin => &self.admins,
        }
    }
}

impl std::fmt::Debug for AccountDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountDirectory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgate_models::{Account, Role};

    #[tokio::test]
    async fn test_collections_are_disjoint() {
        let directory = AccountDirectory::in_memory();
        directory
            .collection(AccountKind::Admin)
            .insert(Account::new("Adam", "h", Role::Admin))
            .await
            .unwrap();

        assert!(
            directory
                .collection(AccountKind::Customer)
                .find_by_username("Adam")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            directory
                .collection(AccountKind::Admin)
                .find_by_username("Adam")
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_same_username_allowed_across_collections() {
        let directory = AccountDirectory::in_memory();
        directory
            .collection(AccountKind::Customer)
            .insert(Account::new("Sam", "h", Role::Member))
            .await
            .unwrap();

        let result = directory
            .collection(AccountKind::Admin)
            .insert(Account::new("Sam", "h", Role::Admin))
            .await;
        assert!(result.is_ok());
    }
}
