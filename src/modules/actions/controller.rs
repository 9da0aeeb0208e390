use axum::response::Html;
use reelgate_core::errors::{Link, message_fragment};
use tracing::info;

use super::Action;
use crate::metrics::track_action_completed;
use crate::middleware::session::CurrentAccount;

/// Runs once every gate for `action` has passed.
pub async fn perform(action: Action, CurrentAccount(account): CurrentAccount) -> Html<String> {
    info!(
        action = action.path,
        username = %account.username,
        role = %account.role,
        "Action completed"
    );
    track_action_completed(action.path);

    Html(message_fragment(action.message, Link::HOME))
}
