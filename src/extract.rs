//! Extractor for the identity resolved by the bearer/session middleware.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

use crate::domain::types::Identity;

/// The authenticated caller for the current request.
///
/// Reads the [`Identity`] extension attached by the `bearer_auth`
/// middleware; rejects with 401 when the request carries neither a valid
/// bearer token nor an established session.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<Identity>().cloned();

        async move { identity.map(Self).ok_or(StatusCode::UNAUTHORIZED) }
    }
}
