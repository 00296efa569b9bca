use axum::http::StatusCode;

use crate::helpers::{SIGN_IN, SIGN_OUT, test_options, test_server};

#[tokio::test]
async fn sign_out_clears_the_session_and_redirects() {
    let server = test_server(test_options());

    server
        .get(SIGN_IN)
        .add_query_param("OverrideUserId", "u1")
        .add_query_param("ReturnUrl", "/home")
        .await;
    assert_eq!(server.get("/whoami").await.status_code(), StatusCode::OK);

    let response = server.get(SIGN_OUT).add_query_param("ReturnUrl", "/after").await;
    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "/after");

    let whoami = server.get("/whoami").await;
    assert_eq!(whoami.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn sign_out_without_a_session_still_redirects() {
    let server = test_server(test_options());

    let response = server.get(SIGN_OUT).add_query_param("ReturnUrl", "/after").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "/after");
}

#[tokio::test]
async fn sign_out_without_return_url_redirects_with_empty_location() {
    let server = test_server(test_options());

    let response = server.get(SIGN_OUT).await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "");
}

#[tokio::test]
async fn sign_out_also_accepts_post() {
    let server = test_server(test_options());

    let response = server.post(SIGN_OUT).add_query_param("ReturnUrl", "/after").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
}
