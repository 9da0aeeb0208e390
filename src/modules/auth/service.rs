use anyhow::anyhow;
use reelgate_core::errors::AppError;
use reelgate_core::password::{hash_password, verify_password};
use reelgate_models::{Account, AccountKind, LoginRequest, RegisterRequest};
use reelgate_store::StoreError;
use tracing::{info, instrument};

use super::register_page;
use crate::metrics::{track_account_registered, track_login_failure, track_login_success};
use crate::state::AppState;

/// How a login attempt ended. Only `SignedIn` may touch the session.
#[derive(Debug)]
pub enum LoginOutcome {
    SignedIn(Account),
    NotFound,
    NotVerified,
}

pub struct AuthService;

impl AuthService {
    /// Creates an account with the collection's default role. Whatever else
    /// the form carried is ignored.
    #[instrument(skip_all, fields(kind = kind.as_str(), username = %dto.username))]
    pub async fn register(
        state: &AppState,
        kind: AccountKind,
        dto: RegisterRequest,
    ) -> Result<Account, AppError> {
        let password_hash = hash_password(dto.password, state.password_config.bcrypt_cost)
            .await
            .map_err(AppError::internal)?;

        let account = Account::new(dto.username, password_hash, kind.default_role());

        match state.accounts.collection(kind).insert(account.clone()).await {
            Ok(()) => {}
            Err(StoreError::DuplicateUsername(_)) => {
                return Err(AppError::conflict(anyhow!("Username already taken"))
                    .with_link(register_page(kind)));
            }
            Err(e) => return Err(AppError::internal(e)),
        }

        info!(role = %account.role, "Account registered");
        track_account_registered(kind.as_str(), account.role.as_str());

        Ok(account)
    }

    #[instrument(skip_all, fields(kind = kind.as_str(), username = %dto.username))]
    pub async fn login(
        state: &AppState,
        kind: AccountKind,
        dto: LoginRequest,
    ) -> Result<LoginOutcome, AppError> {
        let Some(account) = state
            .accounts
            .collection(kind)
            .find_by_username(&dto.username)
            .await
            .map_err(AppError::internal)?
        else {
            info!("Login for unknown account");
            track_login_failure(kind.as_str(), "not_found");
            return Ok(LoginOutcome::NotFound);
        };

        let verified = verify_password(dto.password, account.password_hash.clone())
            .await
            .map_err(AppError::internal)?;

        if !verified {
            info!("Login with wrong password");
            track_login_failure(kind.as_str(), "not_verified");
            return Ok(LoginOutcome::NotVerified);
        }

        track_login_success(kind.as_str(), account.role.as_str());
        Ok(LoginOutcome::SignedIn(account))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use reelgate_config::{PasswordConfig, SessionConfig};
    use reelgate_core::provisioning::StaticKeyAuthority;
    use reelgate_models::Role;
    use reelgate_store::AccountDirectory;

    use super::*;

    const TEST_COST: u32 = 4;

    fn test_state() -> AppState {
        AppState::new(
            AccountDirectory::in_memory(),
            Arc::new(StaticKeyAuthority::from_key("test-key")),
            PasswordConfig {
                bcrypt_cost: TEST_COST,
            },
            SessionConfig::from_vars(|_| None),
        )
    }

    fn register_request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_assigns_default_role() {
        let state = test_state();

        let customer = AuthService::register(
            &state,
            AccountKind::Customer,
            register_request("Alice", "pw"),
        )
        .await
        .unwrap();
        let admin = AuthService::register(&state, AccountKind::Admin, register_request("Bob", "pw"))
            .await
            .unwrap();

        assert_eq!(customer.role, Role::User);
        assert_eq!(admin.role, Role::Admin);
        assert_ne!(customer.password_hash, "pw");
    }

    #[tokio::test]
    async fn test_register_duplicate_is_conflict() {
        let state = test_state();
        AuthService::register(&state, AccountKind::Customer, register_request("Alice", "pw"))
            .await
            .unwrap();

        let err = AuthService::register(
            &state,
            AccountKind::Customer,
            register_request("Alice", "other"),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.link.href, "/register");
    }

    #[tokio::test]
    async fn test_login_outcomes() {
        let state = test_state();
        AuthService::register(&state, AccountKind::Customer, register_request("John", "johnpw"))
            .await
            .unwrap();

        let outcome = AuthService::login(&state, AccountKind::Customer, login_request("John", "johnpw"))
            .await
            .unwrap();
        assert!(matches!(outcome, LoginOutcome::SignedIn(ref a) if a.username == "John"));

        let outcome = AuthService::login(&state, AccountKind::Customer, login_request("John", "nope"))
            .await
            .unwrap();
        assert!(matches!(outcome, LoginOutcome::NotVerified));

        let outcome = AuthService::login(&state, AccountKind::Customer, login_request("john", "johnpw"))
            .await
            .unwrap();
        assert!(matches!(outcome, LoginOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_login_looks_only_in_its_collection() {
        let state = test_state();
        AuthService::register(&state, AccountKind::Customer, register_request("John", "johnpw"))
            .await
            .unwrap();

        let outcome = AuthService::login(&state, AccountKind::Admin, login_request("John", "johnpw"))
            .await
            .unwrap();
        assert!(matches!(outcome, LoginOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_login_with_malformed_hash_is_internal_error() {
        let state = test_state();
        state
            .accounts
            .collection(AccountKind::Customer)
            .insert(Account::new("Broken", "not-a-bcrypt-hash", Role::User))
            .await
            .unwrap();

        let err = AuthService::login(&state, AccountKind::Customer, login_request("Broken", "pw"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
