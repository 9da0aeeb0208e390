//! Server-rendered pages.

use askama::Template;
use reelgate_models::{Account, AccountKind};

use crate::modules::actions::Action;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub username: Option<String>,
    pub role: Option<String>,
    pub actions: Vec<ActionLink>,
}

/// A gated action as listed on the home page.
pub struct ActionLink {
    pub path: &'static str,
    pub label: &'static str,
    pub roles: String,
}

impl From<&Action> for ActionLink {
    fn from(action: &Action) -> Self {
        Self {
            path: action.path,
            label: action.label,
            roles: action.roles().to_string(),
        }
    }
}

impl HomeTemplate {
    pub fn new(account: Option<&Account>, actions: Vec<ActionLink>) -> Self {
        Self {
            title: "Reelgate".to_string(),
            username: account.map(|a| a.username.clone()),
            role: account.map(|a| a.role.to_string()),
            actions,
        }
    }
}

/// Login and registration forms. All four share one template.
#[derive(Template)]
#[template(path = "account_form.html")]
pub struct AccountFormTemplate {
    pub title: String,
    pub action: &'static str,
    pub submit_label: &'static str,
    pub with_key: bool,
}

impl AccountFormTemplate {
    pub fn register(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Customer => Self {
                title: "Register".to_string(),
                action: "/register",
                submit_label: "Register",
                with_key: false,
            },
            AccountKind::Admin => Self {
                title: "Register Admin".to_string(),
                action: "/registerAdmin",
                submit_label: "Register",
                with_key: true,
            },
        }
    }

    pub fn login(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Customer => Self {
                title: "Login".to_string(),
                action: "/login",
                submit_label: "Login",
                with_key: false,
            },
            AccountKind::Admin => Self {
                title: "Admin Login".to_string(),
                action: "/loginAdmin",
                submit_label: "Login",
                with_key: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgate_models::{Role, RoleSet};

    #[test]
    fn test_home_shows_signed_in_identity() {
        let account = Account::new("Sue", "h", Role::MemberPlus);
        let html = HomeTemplate::new(Some(&account), vec![]).render().unwrap();

        assert!(html.contains("Sue"));
        assert!(html.contains("memberPlus"));
    }

    #[test]
    fn test_home_anonymous() {
        let html = HomeTemplate::new(None, vec![]).render().unwrap();
        assert!(html.contains("not signed in"));
    }

    #[test]
    fn test_home_escapes_username() {
        let account = Account::new("<script>", "h", Role::User);
        let html = HomeTemplate::new(Some(&account), vec![]).render().unwrap();

        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_action_link_lists_roles() {
        let action = Action {
            path: "/rentShow",
            label: "Rent a show",
            message: "Show rented",
            roles: &[Role::Member, Role::MemberPlus],
        };
        let link = ActionLink::from(&action);

        assert_eq!(link.roles, RoleSet::from([Role::Member, Role::MemberPlus]).to_string());
    }

    #[test]
    fn test_admin_registration_form_asks_for_key() {
        let html = AccountFormTemplate::register(AccountKind::Admin)
            .render()
            .unwrap();

        assert!(html.contains("action=\"/registerAdmin\""));
        assert!(html.contains("name=\"key\""));

        let html = AccountFormTemplate::register(AccountKind::Customer)
            .render()
            .unwrap();
        assert!(!html.contains("name=\"key\""));
    }
}
