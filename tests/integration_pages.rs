mod common;

use axum::http::{StatusCode, header};
use common::{DEMO_PASSWORD, body_text, get, login, send, setup_test_app};

#[tokio::test]
async fn test_root_redirects_home() {
    let (app, _) = setup_test_app().await;

    let response = send(&app, get("/", None)).await;

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/home");
}

#[tokio::test]
async fn test_home_anonymous() {
    let (app, _) = setup_test_app().await;

    let response = send(&app, get("/home", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("You are not signed in."));
    assert!(body.contains("href=\"/rentMovie\""));
    assert!(body.contains("href=\"/removeAdmin\""));
}

#[tokio::test]
async fn test_home_shows_signed_in_account() {
    let (app, _) = setup_test_app().await;

    let cookie = login(&app, "/login", "Sam", DEMO_PASSWORD).await;
    let response = send(&app, get("/home", Some(&cookie))).await;

    let body = body_text(response).await;
    assert!(body.contains("Welcome, Sam"));
    assert!(body.contains("member"));
}

#[tokio::test]
async fn test_form_pages() {
    let (app, _) = setup_test_app().await;

    for path in ["/register", "/registerAdmin", "/login", "/loginAdmin"] {
        let response = send(&app, get(path, None)).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");

        let body = body_text(response).await;
        assert!(body.contains(&format!("action=\"{path}\"")), "{path}");
        assert_eq!(body.contains("name=\"key\""), path == "/registerAdmin");
    }
}

#[tokio::test]
async fn test_static_assets() {
    let (app, _) = setup_test_app().await;

    let response = send(&app, get("/public/styles.css", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get("/public/missing.css", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
