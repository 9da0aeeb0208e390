use axum::{Router, routing::get};

use super::controller::{home, index};
use crate::state::AppState;

pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/home", get(home))
}
