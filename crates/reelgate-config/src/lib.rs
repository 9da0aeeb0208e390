//! # Reelgate Config
//!
//! Configuration types for Reelgate, loaded from environment variables.
//!
//! - [`server`]: Listen address
//! - [`session`]: Session cookie and signing secret
//! - [`provisioning`]: Pre-hashed administrator provisioning key
//! - [`password`]: bcrypt work factor
//! - [`seed`]: Demo account seeding
//!
//! Every struct has a `from_env()` constructor with defaults and a
//! `from_vars()` constructor taking a lookup function, which is what the
//! tests use instead of touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use reelgate_config::{ProvisioningConfig, SessionConfig};
//!
//! let session_config = SessionConfig::from_env();
//! let provisioning_config = ProvisioningConfig::from_env();
//! ```

pub mod password;
pub mod provisioning;
pub mod seed;
pub mod server;
pub mod session;

// Re-export commonly used types at crate root
pub use password::PasswordConfig;
pub use provisioning::ProvisioningConfig;
pub use seed::SeedConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;

/// Parses a boolean-ish variable; anything other than `false`/`0`/`no`/`off`
/// counts as true.
pub(crate) fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value {
        Some(v) => !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"),
        None => default,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    pub fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(None, false));
        assert!(parse_flag(Some("true".to_string()), false));
        assert!(parse_flag(Some("1".to_string()), false));
        assert!(!parse_flag(Some("FALSE".to_string()), true));
        assert!(!parse_flag(Some(" off ".to_string()), true));
        assert!(!parse_flag(Some("0".to_string()), true));
    }
}
