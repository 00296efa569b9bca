use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Identity-simulation error variants.
///
/// The request-path variants (400/403/404) are terminal for the current
/// request: surfaced directly as a status plus a plain-text reason, never
/// retried or wrapped. The duplicate-* variants only occur while building
/// the registry at startup.
#[derive(Debug, thiserror::Error)]
pub enum StandinError {
    #[error("Authorization header is not in correct format.")]
    MalformedAuthorization,
    #[error("no configured user has the access token '{0}'")]
    UnknownAccessToken(String),
    #[error("no configured user has the id '{0}'")]
    UnknownOverrideUser(String),
    #[error("duplicate user id '{0}' in configured users")]
    DuplicateUserId(String),
    #[error("duplicate access token '{0}' in configured users")]
    DuplicateAccessToken(String),
    #[error("token protection is not supported")]
    TokenProtectionNotSupported,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for StandinError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MalformedAuthorization => StatusCode::BAD_REQUEST,
            Self::UnknownAccessToken(_) => StatusCode::FORBIDDEN,
            Self::UnknownOverrideUser(_) => StatusCode::NOT_FOUND,
            Self::DuplicateUserId(_)
            | Self::DuplicateAccessToken(_)
            | Self::TokenProtectionNotSupported
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests, and 4xx are expected client errors here.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        (status, self.to_string()).into_response()
    }
}
