//! Role-membership gate.
//!
//! One [`RoleGate`] is built per route with the roles that route admits and
//! handed to [`require_role`] as middleware state:
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use crate::middleware::role::{RoleGate, require_role};
//!
//! let route = get(remove_admin)
//!     .route_layer(from_fn_with_state(RoleGate::new([Role::HeadAdmin]), require_role));
//! ```
//!
//! The gate must run after the session gate; use [`crate::middleware::gated`]
//! rather than layering it by hand.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use reelgate_core::errors::AppError;
use reelgate_models::{Account, Role, RoleSet};
use tracing::{debug, warn};

use crate::metrics::track_gate_denied;
use crate::middleware::session::CurrentAccount;

#[derive(Debug, Clone)]
pub struct RoleGate {
    allowed: RoleSet,
}

impl RoleGate {
    pub fn new(allowed: impl Into<RoleSet>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }

    pub fn allowed(&self) -> &RoleSet {
        &self.allowed
    }

    pub fn check(&self, role: Role) -> Result<(), AppError> {
        check_any_role(role, &self.allowed)
    }
}

/// Exact membership test; there is no role hierarchy.
pub fn check_any_role(role: Role, allowed: &RoleSet) -> Result<(), AppError> {
    if !allowed.contains(role) {
        return Err(AppError::not_authorized(StatusCode::FORBIDDEN));
    }

    Ok(())
}

pub fn check_account_role(account: &Account, allowed: &RoleSet) -> Result<(), AppError> {
    check_any_role(account.role, allowed)
}

pub async fn require_role(
    State(gate): State<RoleGate>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(CurrentAccount(account)) = req.extensions().get::<CurrentAccount>() else {
        warn!(path = %req.uri().path(), "Role gate reached without a signed-in account");
        track_gate_denied("session");
        return Err(AppError::sign_in_required());
    };

    if let Err(err) = check_account_role(account, gate.allowed()) {
        warn!(
            path = %req.uri().path(),
            username = %account.username,
            role = %account.role,
            allowed = %gate.allowed(),
            "Role not permitted on this route"
        );
        track_gate_denied("role");
        return Err(err);
    }

    debug!(username = %account.username, role = %account.role, "Role gate passed");
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_any_role_exact_match() {
        let allowed = RoleSet::from([Role::Admin, Role::HeadAdmin]);

        assert!(check_any_role(Role::Admin, &allowed).is_ok());
        assert!(check_any_role(Role::HeadAdmin, &allowed).is_ok());
        assert!(check_any_role(Role::MemberPlus, &allowed).is_err());
    }

    #[test]
    fn test_denial_is_forbidden() {
        let gate = RoleGate::new([Role::HeadAdmin]);
        let err = gate.check(Role::Admin).unwrap_err();

        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(
            err.error.to_string(),
            "You are not authorized to make this request"
        );
    }

    #[test]
    fn test_no_hierarchy_between_roles() {
        // headAdmin is not implicitly allowed where only admin is listed.
        let gate = RoleGate::new([Role::Admin]);
        assert!(gate.check(Role::HeadAdmin).is_err());

        // memberPlus is not implicitly allowed where only user is listed.
        let gate = RoleGate::new([Role::User]);
        assert!(gate.check(Role::MemberPlus).is_err());
    }
}
