pub mod controller;
pub mod router;
pub mod service;

use reelgate_core::errors::Link;
use reelgate_models::AccountKind;

pub fn register_page(kind: AccountKind) -> Link {
    match kind {
        AccountKind::Customer => Link::new("/register", "Register Page"),
        AccountKind::Admin => Link::new("/registerAdmin", "Register Page"),
    }
}

pub fn login_page(kind: AccountKind) -> Link {
    match kind {
        AccountKind::Customer => Link::new("/login", "Login Page"),
        AccountKind::Admin => Link::new("/loginAdmin", "Login Page"),
    }
}
