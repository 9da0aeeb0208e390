use std::env;

/// Holds the hash of the administrator provisioning key (`ADMIN_KEY_HASH`).
///
/// The plaintext key is never configured. Generate the hash with
/// `reelgate-cli hash-key`. When unset, admin self-registration is refused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProvisioningConfig {
    pub admin_key_hash: String,
}

impl ProvisioningConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            admin_key_hash: var("ADMIN_KEY_HASH").unwrap_or_default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.admin_key_hash.trim().is_empty()
    }
}
