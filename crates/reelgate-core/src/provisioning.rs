//! Administrator provisioning control.
//!
//! Self-registration as an administrator requires presenting a shared key.
//! Only its hash is configured: the key is wrapped in a `{"key": ...}`
//! object, encoded as compact JSON and digested with SHA-256 (lowercase hex).
//! This is single-factor, with no rotation or per-admin keys; callers go
//! through [`ProvisioningAuthority`] so a real issuance mechanism can replace
//! it without touching the gate chain.

use std::fmt;

use sha2::{Digest, Sha256};

/// Decides whether a presented key may provision an administrator.
pub trait ProvisioningAuthority: Send + Sync + fmt::Debug {
    fn authorize(&self, presented_key: &str) -> bool;
}

/// Hash of a provisioning key, in the form stored in configuration.
pub fn hash_provisioning_key(key: &str) -> String {
    let canonical = serde_json::json!({ "key": key }).to_string();
    hex::encode(Sha256::digest(canonical.as_bytes()))
}

/// Compares the hash of the presented key against one pre-provisioned hash.
#[derive(Clone)]
pub struct StaticKeyAuthority {
    expected_hash: String,
}

impl StaticKeyAuthority {
    /// An empty hash means provisioning is disabled and every key is refused.
    pub fn new(expected_hash: impl Into<String>) -> Self {
        Self {
            expected_hash: expected_hash.into().trim().to_ascii_lowercase(),
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::new(hash_provisioning_key(key))
    }

    pub fn is_configured(&self) -> bool {
        !self.expected_hash.is_empty()
    }
}

impl ProvisioningAuthority for StaticKeyAuthority {
    fn authorize(&self, presented_key: &str) -> bool {
        self.is_configured() && hash_provisioning_key(presented_key) == self.expected_hash
    }
}

impl fmt::Debug for StaticKeyAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticKeyAuthority")
            .field("configured", &self.is_configured())
            .finish()
    }
}
