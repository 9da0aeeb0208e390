//! Role registry and per-route role sets.
//!
//! Roles form a closed set with no hierarchy. Access checks are always an
//! exact membership test against a [`RoleSet`], never a rank comparison.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::accounts::AccountKind;

/// A role an account can hold.
///
/// The serialized spelling (`user`, `member`, `memberPlus`, `admin`,
/// `headAdmin`) is the identifier used everywhere roles leave the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    User,
    Member,
    MemberPlus,
    Admin,
    HeadAdmin,
}

impl Role {
    /// Every role the registry recognizes.
    pub const ALL: [Role; 5] = [
        Role::User,
        Role::Member,
        Role::MemberPlus,
        Role::Admin,
        Role::HeadAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Member => "member",
            Role::MemberPlus => "memberPlus",
            Role::Admin => "admin",
            Role::HeadAdmin => "headAdmin",
        }
    }

    /// The collection this role conventionally belongs to.
    ///
    /// Nothing stops an account in one collection from holding a role of the
    /// other space; this is only used for display and seeding.
    pub fn kind(&self) -> AccountKind {
        match self {
            Role::User | Role::Member | Role::MemberPlus => AccountKind::Customer,
            Role::Admin | Role::HeadAdmin => AccountKind::Admin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Exact, case-sensitive match against the registry spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

/// The roles permitted on one route.
///
/// Built once at route setup and shared between requests, so cloning is
/// cheap. An empty set admits nobody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSet(Arc<[Role]>);

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        roles.into_iter().collect()
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut roles: Vec<Role> = Vec::new();
        for role in iter {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        RoleSet(roles.into())
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self {
        RoleSet::new(roles)
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Role::as_str).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_with_registry_spelling() {
        assert_eq!(serde_json::to_string(&Role::MemberPlus).unwrap(), "\"memberPlus\"");
        assert_eq!(serde_json::to_string(&Role::HeadAdmin).unwrap(), "\"headAdmin\"");

        let role: Role = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(role, Role::Member);
    }

    #[test]
    fn test_parse_role_is_exact() {
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert_eq!("headAdmin".parse::<Role>(), Ok(Role::HeadAdmin));
        assert!("HeadAdmin".parse::<Role>().is_err());
        assert!("memberplus".parse::<Role>().is_err());
        assert!(" user".parse::<Role>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_kind() {
        assert_eq!(Role::User.kind(), AccountKind::Customer);
        assert_eq!(Role::MemberPlus.kind(), AccountKind::Customer);
        assert_eq!(Role::Admin.kind(), AccountKind::Admin);
        assert_eq!(Role::HeadAdmin.kind(), AccountKind::Admin);
    }

    #[test]
    fn test_role_set_membership_is_exact() {
        let set = RoleSet::from([Role::Member, Role::MemberPlus]);

        assert!(set.contains(Role::Member));
        assert!(set.contains(Role::MemberPlus));
        assert!(!set.contains(Role::User));
        assert!(!set.contains(Role::HeadAdmin));
    }

    #[test]
    fn test_empty_role_set_admits_nobody() {
        let set = RoleSet::new([]);
        assert!(set.is_empty());
        assert!(Role::ALL.iter().all(|role| !set.contains(*role)));
    }

    #[test]
    fn test_role_set_drops_duplicates() {
        let set = RoleSet::from([Role::Admin, Role::Admin, Role::HeadAdmin]);
        assert_eq!(set.iter().count(), 2);
        assert_eq!(set.to_string(), "[admin, headAdmin]");
    }
}
