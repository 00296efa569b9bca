//! Cookie-backed session identity storage.
//!
//! The handlers only see the [`SessionStore`] trait, so tests can swap in an
//! in-memory store and the core never depends on a real HTTP stack.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use time::Duration;

use crate::domain::types::Identity;
use crate::error::StandinError;

/// Cookie name for the session identity.
pub const STANDIN_SESSION_COOKIE: &str = "standin_session";

/// Per-session identity storage keyed off the request's cookie jar.
///
/// One identity per session, tagged with the shared authentication scheme.
pub trait SessionStore: Send + Sync {
    /// Read the current session identity, if one is established.
    fn read(&self, jar: &CookieJar) -> Option<Identity>;

    /// Replace the session identity.
    fn write(&self, jar: CookieJar, identity: &Identity) -> Result<CookieJar, StandinError>;

    /// Drop the session identity regardless of prior state.
    fn clear(&self, jar: CookieJar) -> CookieJar;
}

/// Default store: one cookie holding the base64-encoded JSON identity.
///
/// Not `Secure` — this tool is served over plain HTTP during development.
#[derive(Debug, Clone, Default)]
pub struct CookieSessions;

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((STANDIN_SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

impl SessionStore for CookieSessions {
    fn read(&self, jar: &CookieJar) -> Option<Identity> {
        let cookie = jar.get(STANDIN_SESSION_COOKIE)?;
        // A corrupt or truncated payload reads as "no session".
        let bytes = URL_SAFE_NO_PAD.decode(cookie.value()).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    fn write(&self, jar: CookieJar, identity: &Identity) -> Result<CookieJar, StandinError> {
        let json = serde_json::to_vec(identity).map_err(|e| StandinError::Internal(e.into()))?;
        Ok(jar.add(session_cookie(URL_SAFE_NO_PAD.encode(json))))
    }

    fn clear(&self, jar: CookieJar) -> CookieJar {
        let cookie = Cookie::build((STANDIN_SESSION_COOKIE, ""))
            .path("/")
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        jar.add(cookie)
    }
}
