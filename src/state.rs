use std::sync::Arc;

use reelgate_config::{PasswordConfig, ProvisioningConfig, SeedConfig, SessionConfig};
use reelgate_core::provisioning::{ProvisioningAuthority, StaticKeyAuthority};
use reelgate_store::{AccountDirectory, seed_demo_accounts};
use tracing::warn;

#[derive(Clone, Debug)]
pub struct AppState {
    pub accounts: AccountDirectory,
    pub provisioning: Arc<dyn ProvisioningAuthority>,
    pub password_config: PasswordConfig,
    pub session_config: SessionConfig,
}

impl AppState {
    pub fn new(
        accounts: AccountDirectory,
        provisioning: Arc<dyn ProvisioningAuthority>,
        password_config: PasswordConfig,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            accounts,
            provisioning,
            password_config,
            session_config,
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let session_config = SessionConfig::from_env();
    let provisioning_config = ProvisioningConfig::from_env();
    let password_config = PasswordConfig::from_env();
    let seed_config = SeedConfig::from_env();

    if session_config.uses_development_secret() {
        warn!("SESSION_SECRET is not set; using the development secret");
    }
    if !provisioning_config.is_configured() {
        warn!("ADMIN_KEY_HASH is not set; admin self-registration is disabled");
    }

    let accounts = AccountDirectory::in_memory();
    seed_demo_accounts(&accounts, &seed_config, password_config.bcrypt_cost).await?;

    Ok(AppState::new(
        accounts,
        Arc::new(StaticKeyAuthority::new(provisioning_config.admin_key_hash)),
        password_config,
        session_config,
    ))
}
