//! Provisioning-key gate for administrator self-registration.
//!
//! Reads the `key` field of the urlencoded form and asks the configured
//! [`ProvisioningAuthority`] whether it may provision an administrator. The
//! body is buffered and handed on unchanged, so the registration handler
//! still sees the whole form. A body that cannot be buffered within
//! [`MAX_FORM_BYTES`] is refused like a wrong key.

use std::sync::Arc;

use axum::{
    Form,
    body::{Body, to_bytes},
    extract::{FromRequest, Request, State},
    http::{self, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};
use reelgate_core::errors::AppError;
use reelgate_core::provisioning::ProvisioningAuthority;
use reelgate_models::ProvisioningKeyForm;
use tracing::{debug, warn};

use crate::metrics::track_gate_denied;

/// Largest registration form the gate will buffer.
pub const MAX_FORM_BYTES: usize = 16 * 1024;

pub async fn require_provisioning_key(
    State(authority): State<Arc<dyn ProvisioningAuthority>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %parts.uri.path(), error = %e, "Rejected unreadable admin registration form");
            track_gate_denied("provisioning");
            return Err(AppError::not_authorized(StatusCode::UNAUTHORIZED));
        }
    };

    let mut key_request = http::Request::builder()
        .method(parts.method.clone())
        .uri(parts.uri.clone());
    if let Some(content_type) = parts.headers.get(CONTENT_TYPE) {
        key_request = key_request.header(CONTENT_TYPE, content_type.clone());
    }
    let key_request = key_request
        .body(Body::from(bytes.clone()))
        .map_err(AppError::internal)?;

    let key = match Form::<ProvisioningKeyForm>::from_request(key_request, &()).await {
        Ok(Form(form)) => form.key,
        Err(rejection) => {
            debug!(%rejection, "Unreadable admin registration form");
            String::new()
        }
    };

    if !authority.authorize(&key) {
        warn!(path = %parts.uri.path(), "Rejected admin registration with an invalid provisioning key");
        track_gate_denied("provisioning");
        return Err(AppError::not_authorized(StatusCode::UNAUTHORIZED));
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
