#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use reelgate::reelgate_config::{PasswordConfig, SeedConfig, SessionConfig};
use reelgate::reelgate_core::provisioning::StaticKeyAuthority;
use reelgate::reelgate_store::{AccountDirectory, seed_demo_accounts};
use reelgate::router::init_router;
use reelgate::state::AppState;
use tower::ServiceExt;

pub const TEST_COST: u32 = 4;
pub const ADMIN_KEY: &str = "test-admin-key";
/// Password shared by the seeded demo accounts.
pub const DEMO_PASSWORD: &str = "password";

pub async fn test_state() -> AppState {
    let accounts = AccountDirectory::in_memory();
    let seed = SeedConfig {
        enabled: true,
        password: DEMO_PASSWORD.to_string(),
    };
    seed_demo_accounts(&accounts, &seed, TEST_COST).await.unwrap();

    AppState::new(
        accounts,
        Arc::new(StaticKeyAuthority::from_key(ADMIN_KEY)),
        PasswordConfig {
            bcrypt_cost: TEST_COST,
        },
        SessionConfig {
            secret: "integration-test-secret".to_string(),
            cookie_name: "reelgate.sid".to_string(),
            secure: false,
        },
    )
}

pub async fn setup_test_app() -> (Router, AppState) {
    let state = test_state().await;
    (init_router(state.clone()), state)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// The `name=value` pair from the session `Set-Cookie` header, ready to be
/// sent back in a `Cookie` header.
pub fn session_cookie<B>(response: &Response<B>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_string())
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Signs in through the login form and returns the session cookie.
pub async fn login(app: &Router, path: &str, username: &str, password: &str) -> String {
    let form = format!("username={username}&password={password}");
    let response = send(app, post_form(path, &form, None)).await;
    session_cookie(&response).unwrap_or_else(|| panic!("{username} did not get a session"))
}
