use std::sync::Arc;

use crate::domain::registry::UserRegistry;
use crate::domain::session::{CookieSessions, SessionStore};
use crate::domain::types::User;
use crate::error::StandinError;
use crate::handlers::picker::{HtmlUserPicker, UserPicker};
use crate::state::AppState;
use crate::usecase::bearer::{AfterBearerValidate, BearerValidation};

/// Default sign-in endpoint path.
pub const DEFAULT_SIGN_IN_URI: &str = "/standin/sign-in";

/// Default sign-out endpoint path.
pub const DEFAULT_SIGN_OUT_URI: &str = "/standin/sign-out";

/// Programmatic configuration surface for the identity simulation layer.
///
/// ```
/// use standin::config::StandinOptions;
/// use standin::domain::types::User;
///
/// let state = StandinOptions::new()
///     .user(User::new("u1", "User 1").access_token("tok-1").claim("role", "admin"))
///     .user(User::new("u2", "User 2"))
///     .build()
///     .unwrap();
/// assert_eq!(state.registry.users().len(), 2);
/// ```
pub struct StandinOptions {
    users: Vec<User>,
    sign_in_uri: String,
    sign_out_uri: String,
    sessions: Arc<dyn SessionStore>,
    picker: Arc<dyn UserPicker>,
    after_bearer_validate: Option<AfterBearerValidate>,
}

impl Default for StandinOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl StandinOptions {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            sign_in_uri: DEFAULT_SIGN_IN_URI.to_owned(),
            sign_out_uri: DEFAULT_SIGN_OUT_URI.to_owned(),
            sessions: Arc::new(CookieSessions),
            picker: Arc::new(HtmlUserPicker),
            after_bearer_validate: None,
        }
    }

    pub fn user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Append users from a JSON array (`[{"id": .., "name": .., ..}]`).
    pub fn users_from_json(mut self, json: &str) -> Result<Self, StandinError> {
        let users: Vec<User> = serde_json::from_str(json)
            .map_err(|e| StandinError::Internal(anyhow::anyhow!("invalid users JSON: {e}")))?;
        self.users.extend(users);
        Ok(self)
    }

    pub fn sign_in_uri(mut self, uri: impl Into<String>) -> Self {
        self.sign_in_uri = uri.into();
        self
    }

    pub fn sign_out_uri(mut self, uri: impl Into<String>) -> Self {
        self.sign_out_uri = uri.into();
        self
    }

    /// Replace the cookie-backed session store.
    pub fn session_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.sessions = Arc::new(store);
        self
    }

    /// Replace the default user-picker page renderer.
    pub fn picker(mut self, picker: impl UserPicker + 'static) -> Self {
        self.picker = Arc::new(picker);
        self
    }

    /// Observe every successful bearer validation.
    pub fn after_bearer_validate(
        mut self,
        hook: impl Fn(&BearerValidation) + Send + Sync + 'static,
    ) -> Self {
        self.after_bearer_validate = Some(Arc::new(hook));
        self
    }

    /// Index the configured users and assemble the shared state. Fails on a
    /// duplicate user id or access token.
    pub fn build(self) -> Result<AppState, StandinError> {
        let registry = UserRegistry::new(self.users)?;
        Ok(AppState {
            registry: Arc::new(registry),
            sessions: self.sessions,
            picker: self.picker,
            sign_in_uri: self.sign_in_uri,
            sign_out_uri: self.sign_out_uri,
            after_bearer_validate: self.after_bearer_validate,
        })
    }
}

/// Binary configuration loaded from environment variables.
#[derive(Debug)]
pub struct StandinConfig {
    /// Path to a JSON file holding the user array. Env var: `USERS_FILE`.
    pub users_file: String,
    /// Sign-in endpoint path. Env var: `SIGN_IN_URI`.
    pub sign_in_uri: String,
    /// Sign-out endpoint path. Env var: `SIGN_OUT_URI`.
    pub sign_out_uri: String,
    /// TCP port to listen on (default 3118). Env var: `STANDIN_PORT`.
    pub port: u16,
}

impl StandinConfig {
    pub fn from_env() -> Self {
        Self {
            users_file: std::env::var("USERS_FILE").expect("USERS_FILE"),
            sign_in_uri: std::env::var("SIGN_IN_URI")
                .unwrap_or_else(|_| DEFAULT_SIGN_IN_URI.to_owned()),
            sign_out_uri: std::env::var("SIGN_OUT_URI")
                .unwrap_or_else(|_| DEFAULT_SIGN_OUT_URI.to_owned()),
            port: std::env::var("STANDIN_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3118),
        }
    }
}
