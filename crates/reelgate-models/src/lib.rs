//! # Reelgate Models
//!
//! Domain models and DTOs for Reelgate.
//!
//! # Modules
//!
//! - [`accounts`]: Account records and the two account collections
//! - [`auth`]: Login and registration form payloads
//! - [`roles`]: The closed role registry and per-route role sets
//!
//! # Example
//!
//! ```ignore
//! use reelgate_models::{Account, AccountKind, Role, RoleSet};
//!
//! let rent_show = RoleSet::from([Role::Member, Role::MemberPlus]);
//! assert!(rent_show.contains(Role::MemberPlus));
//! assert_eq!(AccountKind::Admin.default_role(), Role::Admin);
//! ```

pub mod accounts;
pub mod auth;
pub mod roles;

// Re-export commonly used types at crate root for convenience
pub use accounts::{Account, AccountKind};
pub use auth::{LoginRequest, ProvisioningKeyForm, RegisterRequest};
pub use roles::{ParseRoleError, Role, RoleSet};
