use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// 302 to the caller-supplied return URL.
///
/// The destination is echoed verbatim — no allow-list, no same-origin check.
/// That is an open redirect, kept on purpose: this tool only runs in
/// development and the original behaves the same way. An absent return URL
/// (or one that is not a legal header value) yields an empty `Location`.
pub fn redirect_to_return_url(return_url: Option<&str>) -> Response {
    let location = return_url
        .and_then(|v| HeaderValue::from_str(v).ok())
        .unwrap_or_else(|| HeaderValue::from_static(""));

    let mut response = StatusCode::FOUND.into_response();
    response.headers_mut().insert(header::LOCATION, location);
    response
}
