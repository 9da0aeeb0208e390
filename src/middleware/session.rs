use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use reelgate_core::errors::AppError;
use reelgate_models::Account;
use tower_sessions::Session;
use tracing::warn;

use crate::metrics::track_gate_denied;
use crate::session::current_account;

/// The account the session gate found, attached to the request for the
/// stages after it.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

/// Lets a request through only if its session holds an account.
pub async fn require_session(
    session: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(account) = current_account(&session).await? else {
        warn!(path = %req.uri().path(), "Rejected request without a signed-in account");
        track_gate_denied("session");
        return Err(AppError::sign_in_required());
    };

    req.extensions_mut().insert(CurrentAccount(account));
    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentAccount>()
            .cloned()
            .ok_or_else(AppError::sign_in_required)
    }
}
