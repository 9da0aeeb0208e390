//! Account records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// A registered account.
///
/// Accounts are never mutated once stored; the session keeps a full copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    /// bcrypt hash of the password, salt included.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            role,
            created_at: Utc::now(),
        }
    }
}

/// Which collection an account lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Customer,
    Admin,
}

impl AccountKind {
    /// Role given to every account registered into this collection.
    pub fn default_role(&self) -> Role {
        match self {
            AccountKind::Customer => Role::User,
            AccountKind::Admin => Role::Admin,
        }
    }

    /// Noun used in user-facing messages ("Cannot Find User").
    pub fn display_name(&self) -> &'static str {
        match self {
            AccountKind::Customer => "User",
            AccountKind::Admin => "Admin",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Customer => "customer",
            AccountKind::Admin => "admin",
        }
    }
}
