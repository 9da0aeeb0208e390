use axum::{Router, middleware};
use tower_http::services::ServeDir;

use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::modules::actions::router::init_actions_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::pages::router::init_pages_router;
use crate::session::session_layer;
use crate::state::AppState;

const PUBLIC_DIR: &str = "public";

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_pages_router())
        .merge(init_auth_router(state.provisioning.clone()))
        .merge(init_actions_router())
        .nest_service("/public", ServeDir::new(PUBLIC_DIR))
        .layer(session_layer(&state.session_config))
        .with_state(state)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
