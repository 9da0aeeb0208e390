use askama::Template;
use axum::response::{Html, Redirect};
use reelgate_core::errors::AppError;
use tower_sessions::Session;

use super::templates::{ActionLink, HomeTemplate};
use crate::modules::actions::ACTIONS;
use crate::session::current_account;

pub async fn index() -> Redirect {
    Redirect::to("/home")
}

/// Home page showing who is signed in, if anyone.
pub async fn home(session: Session) -> Result<Html<String>, AppError> {
    let account = current_account(&session).await?;
    let actions = ACTIONS.iter().map(ActionLink::from).collect();

    let page = HomeTemplate::new(account.as_ref(), actions);
    Ok(Html(page.render()?))
}
