//! Gated rental and administration actions.
//!
//! [`ACTIONS`] is the single table of gated routes: the router registers
//! each entry behind the gate chain with its role set, and the home page
//! lists them.

pub mod controller;
pub mod router;

use reelgate_models::{Role, RoleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub path: &'static str,
    pub label: &'static str,
    /// Heading of the success response.
    pub message: &'static str,
    pub roles: &'static [Role],
}

impl Action {
    pub fn roles(&self) -> RoleSet {
        RoleSet::new(self.roles.iter().copied())
    }
}

const CUSTOMERS: &[Role] = &[Role::User, Role::Member, Role::MemberPlus];
const MEMBERS: &[Role] = &[Role::Member, Role::MemberPlus];
const MEMBERS_PLUS: &[Role] = &[Role::MemberPlus];
const ADMINS: &[Role] = &[Role::Admin, Role::HeadAdmin];
const HEAD_ADMINS: &[Role] = &[Role::HeadAdmin];

pub const ACTIONS: [Action; 8] = [
    Action {
        path: "/rentMovie",
        label: "Rent a movie",
        message: "Movie rented",
        roles: CUSTOMERS,
    },
    Action {
        path: "/rentShow",
        label: "Rent a show",
        message: "Show rented",
        roles: MEMBERS,
    },
    Action {
        path: "/rentMovieHD",
        label: "Rent a movie in HD",
        message: "Movie rented in HD",
        roles: MEMBERS_PLUS,
    },
    Action {
        path: "/rentShowHD",
        label: "Rent a show in HD",
        message: "Show rented in HD",
        roles: MEMBERS_PLUS,
    },
    Action {
        path: "/editMovies",
        label: "Edit movies",
        message: "Movies Edited",
        roles: ADMINS,
    },
    Action {
        path: "/editShows",
        label: "Edit shows",
        message: "Shows Edited",
        roles: ADMINS,
    },
    Action {
        path: "/changeCustomerRoles",
        label: "Change customer roles",
        message: "Customer Role Changed",
        roles: ADMINS,
    },
    Action {
        path: "/removeAdmin",
        label: "Remove an admin",
        message: "Admin Removed",
        roles: HEAD_ADMINS,
    },
];
