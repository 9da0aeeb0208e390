use axum::{Router, routing::get};

use super::ACTIONS;
use super::controller::perform;
use crate::middleware::gated;
use crate::middleware::session::CurrentAccount;
use crate::state::AppState;

pub fn init_actions_router() -> Router<AppState> {
    ACTIONS.iter().fold(Router::new(), |router, &action| {
        let handler = get(move |current: CurrentAccount| perform(action, current));
        router.route(action.path, gated(handler, action.roles()))
    })
}
