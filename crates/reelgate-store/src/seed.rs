//! Demo accounts for local runs.

use reelgate_config::SeedConfig;
use reelgate_core::password::{PasswordError, hash_password};
use reelgate_models::{Account, Role};
use tracing::{debug, info};

use crate::directory::AccountDirectory;
use crate::repository::StoreError;

/// One demo account per role.
pub const DEMO_ACCOUNTS: [(&str, Role); 5] = [
    ("John", Role::User),
    ("Sam", Role::Member),
    ("Sue", Role::MemberPlus),
    ("Adam", Role::Admin),
    ("Sarah", Role::HeadAdmin),
];

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Inserts the demo accounts into the collection matching each role, all
/// sharing the configured password. Accounts that already exist are left
/// alone. Returns how many were added.
pub async fn seed_demo_accounts(
    directory: &AccountDirectory,
    config: &SeedConfig,
    bcrypt_cost: u32,
) -> Result<usize, SeedError> {
    if !config.enabled {
        debug!("Demo account seeding disabled");
        return Ok(0);
    }

    let mut added = 0;
    for (username, role) in DEMO_ACCOUNTS {
        let hash = hash_password(config.password.as_str(), bcrypt_cost).await?;
        match directory
            .collection(role.kind())
            .insert(Account::new(username, hash, role))
            .await
        {
            Ok(()) => added += 1,
            Err(StoreError::DuplicateUsername(_)) => {
                debug!(username, "Demo account already present");
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(added, "Seeded demo accounts");
    Ok(added)
}
