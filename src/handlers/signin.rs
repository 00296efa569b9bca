use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::error::StandinError;
use crate::handlers::redirect::redirect_to_return_url;
use crate::state::AppState;
use crate::usecase::signin::establish_session;

/// Query parameters shared by the sign-in and sign-out endpoints. Key names
/// are part of the wire contract (see the `domain::types` constants).
#[derive(Deserialize)]
pub struct SignInQuery {
    #[serde(rename = "OverrideUserId")]
    pub override_user_id: Option<String>,
    #[serde(rename = "ReturnUrl")]
    pub return_url: Option<String>,
}

// ── GET/POST {sign_in_uri} ───────────────────────────────────────────────────

/// Sign-in endpoint.
///
/// Without an override selection this renders the user picker. With one, it
/// establishes the session identity and 302s to the return URL; an unknown
/// id ends the request with 404 and leaves the session untouched.
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<SignInQuery>,
) -> Result<Response, StandinError> {
    let override_user_id = query.override_user_id.as_deref().unwrap_or("").trim();

    if override_user_id.is_empty() {
        let page = state
            .picker
            .render(&state.registry, &state.sign_in_uri, query.return_url.as_deref());
        return Ok(Html(page).into_response());
    }

    let identity = establish_session(&state.registry, override_user_id)?;
    let jar = state.sessions.write(jar, &identity)?;

    Ok((jar, redirect_to_return_url(query.return_url.as_deref())).into_response())
}

// ── GET/POST {sign_out_uri} ──────────────────────────────────────────────────

/// Sign-out endpoint: drop the session identity, then the shared redirect.
pub async fn sign_out(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<SignInQuery>,
) -> Response {
    let jar = state.sessions.clear(jar);
    (jar, redirect_to_return_url(query.return_url.as_deref())).into_response()
}
