use axum::http::StatusCode;

use standin::domain::types::{ACCESS_TOKEN_CLAIM, Identity};

use crate::helpers::{SIGN_IN, test_options, test_server};

#[tokio::test]
async fn sign_in_without_override_renders_the_picker() {
    let server = test_server(test_options());

    let response = server.get(SIGN_IN).add_query_param("ReturnUrl", "/home").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let page = response.text();
    assert!(page.contains(">User 1</a>"));
    assert!(page.contains(">User 2</a>"));
    assert!(page.contains("OverrideUserId=u1"));
    assert!(page.contains("ReturnUrl=%2Fhome"));
}

#[tokio::test]
async fn override_establishes_session_and_redirects_to_return_url() {
    let server = test_server(test_options());

    let response = server
        .get(SIGN_IN)
        .add_query_param("OverrideUserId", "u1")
        .add_query_param("ReturnUrl", "/home")
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "/home");

    // The established identity is session-only: no access_token claim.
    let whoami = server.get("/whoami").await;
    assert_eq!(whoami.status_code(), StatusCode::OK);
    let identity: Identity = whoami.json();
    assert_eq!(identity.name(), Some("User 1"));
    assert_eq!(identity.claim("role"), Some("admin"));
    assert_eq!(identity.claim(ACCESS_TOKEN_CLAIM), None);
}

#[tokio::test]
async fn override_works_for_users_without_access_tokens() {
    let server = test_server(test_options());

    let response = server
        .get(SIGN_IN)
        .add_query_param("OverrideUserId", "u2")
        .add_query_param("ReturnUrl", "/home")
        .await;
    assert_eq!(response.status_code(), StatusCode::FOUND);

    let identity: Identity = server.get("/whoami").await.json();
    assert_eq!(identity.name(), Some("User 2"));
    assert_eq!(identity.claim("role"), Some("viewer"));
}

#[tokio::test]
async fn unknown_override_is_404_and_leaves_session_untouched() {
    let server = test_server(test_options());

    let response = server
        .get(SIGN_IN)
        .add_query_param("OverrideUserId", "ghost")
        .add_query_param("ReturnUrl", "/home")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("'ghost'"));
    assert!(response.maybe_header("location").is_none());

    let whoami = server.get("/whoami").await;
    assert_eq!(whoami.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_return_url_redirects_with_empty_location() {
    let server = test_server(test_options());

    let response = server
        .get(SIGN_IN)
        .add_query_param("OverrideUserId", "u1")
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "");
}

#[tokio::test]
async fn return_url_is_echoed_verbatim_even_when_external() {
    let server = test_server(test_options());

    let response = server
        .get(SIGN_IN)
        .add_query_param("OverrideUserId", "u1")
        .add_query_param("ReturnUrl", "https://elsewhere.example/landing")
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://elsewhere.example/landing");
}

#[tokio::test]
async fn sign_in_also_accepts_post() {
    let server = test_server(test_options());

    let response = server
        .post(SIGN_IN)
        .add_query_param("OverrideUserId", "u1")
        .add_query_param("ReturnUrl", "/home")
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "/home");
}
