use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use uuid::Uuid;

use crate::domain::types::Identity;
use crate::state::AppState;
use crate::usecase::bearer::validate_bearer;

/// Bearer authentication in front of every route.
///
/// A valid token attaches the resolved [`Identity`] as a request extension
/// and writes it into the session store, so the next request in the same
/// session may drop the header. Requests without a credential fall back to
/// the session cookie; a malformed or unknown credential terminates the
/// request with 400/403.
pub async fn bearer_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    match validate_bearer(&state.registry, header.as_deref()) {
        Ok(Some(validation)) => {
            request.extensions_mut().insert(validation.identity.clone());

            let jar = match state.sessions.write(jar, &validation.identity) {
                Ok(jar) => jar,
                Err(e) => return e.into_response(),
            };

            if let Some(hook) = &state.after_bearer_validate {
                hook(&validation);
            }

            let response = next.run(request).await;
            (jar, response).into_response()
        }
        Ok(None) => {
            if let Some(identity) = state.sessions.read(&jar) {
                request.extensions_mut().insert::<Identity>(identity);
            }
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(id.parse().unwrap()))
    }
}

/// Build the request-id layer. Apply with `.layer(request_id_layer())` in router.
pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::new(
        axum::http::HeaderName::from_static("x-request-id"),
        MakeUuidRequestId,
    )
}
