//! Session cookie configuration.
//!
//! - `SESSION_SECRET`: secret the cookie signing key is derived from
//! - `SESSION_COOKIE_NAME`: cookie name (default: `reelgate.sid`)
//! - `SESSION_COOKIE_SECURE`: mark the cookie `Secure` (default: false)

use std::env;

/// Secret used when `SESSION_SECRET` is unset. Fine for local runs only.
pub const DEVELOPMENT_SECRET: &str = "reelgate-development-secret-change-me";

#[derive(Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub secret: String,
    pub cookie_name: String,
    pub secure: bool,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            secret: var("SESSION_SECRET")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEVELOPMENT_SECRET.to_string()),
            cookie_name: var("SESSION_COOKIE_NAME")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "reelgate.sid".to_string()),
            secure: crate::parse_flag(var("SESSION_COOKIE_SECURE"), false),
        }
    }

    pub fn uses_development_secret(&self) -> bool {
        self.secret == DEVELOPMENT_SECRET
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("cookie_name", &self.cookie_name)
            .field("secure", &self.secure)
            .finish()
    }
}
