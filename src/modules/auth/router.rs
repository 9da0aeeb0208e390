use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post},
};
use reelgate_core::provisioning::ProvisioningAuthority;

use super::controller::{
    login_admin, login_admin_form, login_customer, login_form, register_admin,
    register_admin_form, register_customer, register_form,
};
use crate::middleware::provisioning::require_provisioning_key;
use crate::state::AppState;

/// Form pages and their submissions share a path. Only the admin
/// registration submit sits behind the provisioning gate.
pub fn init_auth_router(provisioning: Arc<dyn ProvisioningAuthority>) -> Router<AppState> {
    let provisioned_register = post(register_admin)
        .route_layer(from_fn_with_state(provisioning, require_provisioning_key));

    Router::new()
        .route("/register", get(register_form).post(register_customer))
        .route(
            "/registerAdmin",
            get(register_admin_form).merge(provisioned_register),
        )
        .route("/login", get(login_form).post(login_customer))
        .route("/loginAdmin", get(login_admin_form).post(login_admin))
}
