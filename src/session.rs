//! Server-side sessions.
//!
//! Sessions live in a [`MemoryStore`] and are addressed by a signed cookie.
//! Each session holds at most one value, the signed-in [`Account`], stored
//! under [`CURRENT_ACCOUNT_KEY`].

use reelgate_config::SessionConfig;
use reelgate_core::errors::AppError;
use reelgate_models::Account;
use sha2::{Digest, Sha512};
use tower_sessions::{
    MemoryStore, Session, SessionManagerLayer,
    cookie::{Key, SameSite},
    service::SignedCookie,
};

pub const CURRENT_ACCOUNT_KEY: &str = "account";

/// Derives the 64-byte cookie signing key from the configured secret.
pub fn signing_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

pub fn session_layer(config: &SessionConfig) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.cookie_name.clone())
        .with_secure(config.secure)
        .with_same_site(SameSite::Lax)
        .with_signed(signing_key(&config.secret))
}

pub async fn current_account(session: &Session) -> Result<Option<Account>, AppError> {
    session
        .get::<Account>(CURRENT_ACCOUNT_KEY)
        .await
        .map_err(AppError::internal)
}

/// Replaces whatever account the session held.
pub async fn sign_in(session: &Session, account: &Account) -> Result<(), AppError> {
    session
        .insert(CURRENT_ACCOUNT_KEY, account)
        .await
        .map_err(AppError::internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_key_is_stable_per_secret() {
        assert_eq!(
            signing_key("secret").master(),
            signing_key("secret").master()
        );
        assert_ne!(
            signing_key("secret").master(),
            signing_key("other").master()
        );
    }
}
