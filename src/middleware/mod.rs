//! The authorization gate chain.
//!
//! # Modules
//!
//! - [`session`]: session-presence gate and the [`session::CurrentAccount`] extractor
//! - [`role`]: role-membership gate configured per route with a [`RoleSet`]
//! - [`provisioning`]: provisioning-key gate for admin self-registration
//!
//! # Composition
//!
//! Gated actions are wrapped with [`gated`], which always runs the session
//! gate before the role gate. The session gate attaches the signed-in
//! account to the request; the role gate reads it from there and rejects
//! as "sign in required" if it is missing.
//!
//! ```ignore
//! use crate::middleware::gated;
//! use reelgate_models::Role;
//!
//! let router = Router::new().route(
//!     "/rentShow",
//!     gated(get(rent_show), [Role::Member, Role::MemberPlus]),
//! );
//! ```

pub mod provisioning;
pub mod role;
pub mod session;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::MethodRouter;
use reelgate_models::RoleSet;

use self::role::{RoleGate, require_role};
use self::session::require_session;

/// Puts a route behind the session gate and then the role gate for `roles`.
pub fn gated<S>(route: MethodRouter<S>, roles: impl Into<RoleSet>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Layers added last run first.
    route
        .route_layer(from_fn_with_state(RoleGate::new(roles), require_role))
        .route_layer(from_fn(require_session))
}
