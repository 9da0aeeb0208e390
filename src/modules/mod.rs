//! Feature modules.
//!
//! Each module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: Axum router configuration
//! - `service.rs`: Business logic, where there is any
//!
//! - [`actions`]: Gated rental and administration actions
//! - [`auth`]: Login and registration
//! - [`pages`]: Home page and shared templates

pub mod actions;
pub mod auth;
pub mod pages;
