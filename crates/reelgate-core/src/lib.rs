//! # Reelgate Core
//!
//! Core types, errors, and utilities for Reelgate.
//!
//! - [`errors`]: Application error type rendered as HTML fragments
//! - [`password`]: bcrypt hashing and verification off the async executor
//! - [`provisioning`]: The administrator provisioning-key check
//!
//! # Example
//!
//! ```ignore
//! use reelgate_core::errors::AppError;
//! use reelgate_core::password::{hash_password, verify_password};
//! use reelgate_core::provisioning::{ProvisioningAuthority, StaticKeyAuthority};
//!
//! let hash = hash_password("pw1", 10).await?;
//! assert!(verify_password("pw1", hash).await?);
//!
//! let authority = StaticKeyAuthority::from_key("letmein");
//! assert!(authority.authorize("letmein"));
//! ```

pub mod errors;
pub mod password;
pub mod provisioning;

// Re-export commonly used types at crate root
pub use errors::{AppError, Link, message_fragment};
pub use password::{PasswordError, hash_password, verify_password};
pub use provisioning::{ProvisioningAuthority, StaticKeyAuthority, hash_provisioning_key};
