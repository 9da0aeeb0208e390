use askama::Template;
use axum::extract::State;
use axum::http::{StatusCode, header::LOCATION};
use axum::response::{Html, IntoResponse, Response};
use reelgate_core::errors::{AppError, Link, message_fragment};
use reelgate_models::{AccountKind, LoginRequest, RegisterRequest};
use tower_sessions::Session;
use tracing::{info, instrument};

use super::login_page;
use super::service::{AuthService, LoginOutcome};
use crate::modules::pages::templates::AccountFormTemplate;
use crate::session::sign_in;
use crate::state::AppState;
use crate::validator::ValidatedForm;

fn render_form(page: AccountFormTemplate) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}

pub async fn register_form() -> Result<Html<String>, AppError> {
    render_form(AccountFormTemplate::register(AccountKind::Customer))
}

pub async fn register_admin_form() -> Result<Html<String>, AppError> {
    render_form(AccountFormTemplate::register(AccountKind::Admin))
}

pub async fn login_form() -> Result<Html<String>, AppError> {
    render_form(AccountFormTemplate::login(AccountKind::Customer))
}

pub async fn login_admin_form() -> Result<Html<String>, AppError> {
    render_form(AccountFormTemplate::login(AccountKind::Admin))
}

/// Register a customer account and sign it in.
#[instrument(skip_all)]
pub async fn register_customer(
    State(state): State<AppState>,
    session: Session,
    ValidatedForm(dto): ValidatedForm<RegisterRequest>,
) -> Result<Response, AppError> {
    register(&state, &session, AccountKind::Customer, dto).await
}

/// Register an administrator. Only reachable past the provisioning-key gate.
#[instrument(skip_all)]
pub async fn register_admin(
    State(state): State<AppState>,
    session: Session,
    ValidatedForm(dto): ValidatedForm<RegisterRequest>,
) -> Result<Response, AppError> {
    register(&state, &session, AccountKind::Admin, dto).await
}

#[instrument(skip_all)]
pub async fn login_customer(
    State(state): State<AppState>,
    session: Session,
    ValidatedForm(dto): ValidatedForm<LoginRequest>,
) -> Result<Html<String>, AppError> {
    login(&state, &session, AccountKind::Customer, dto).await
}

#[instrument(skip_all)]
pub async fn login_admin(
    State(state): State<AppState>,
    session: Session,
    ValidatedForm(dto): ValidatedForm<LoginRequest>,
) -> Result<Html<String>, AppError> {
    login(&state, &session, AccountKind::Admin, dto).await
}

async fn register(
    state: &AppState,
    session: &Session,
    kind: AccountKind,
    dto: RegisterRequest,
) -> Result<Response, AppError> {
    let account = AuthService::register(state, kind, dto).await?;
    sign_in(session, &account).await?;

    Ok((StatusCode::FOUND, [(LOCATION, Link::HOME.href)]).into_response())
}

async fn login(
    state: &AppState,
    session: &Session,
    kind: AccountKind,
    dto: LoginRequest,
) -> Result<Html<String>, AppError> {
    let fragment = match AuthService::login(state, kind, dto).await? {
        LoginOutcome::SignedIn(account) => {
            sign_in(session, &account).await?;
            info!(username = %account.username, role = %account.role, "Signed in");
            message_fragment("Successfully Logged In!", Link::HOME)
        }
        LoginOutcome::NotFound => message_fragment(
            &format!("Cannot Find {}", kind.display_name()),
            login_page(kind),
        ),
        LoginOutcome::NotVerified => message_fragment(
            &format!("{} Not Verified", kind.display_name()),
            login_page(kind),
        ),
    };

    Ok(Html(fragment))
}
