//! Login and registration form payloads.
//!
//! Unknown form fields are ignored, so a `role` submitted alongside a
//! registration never reaches the account.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// The part of an admin registration form read by the provisioning gate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvisioningKeyForm {
    #[serde(default)]
    pub key: String,
}
