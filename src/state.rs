use std::sync::Arc;

use crate::domain::registry::UserRegistry;
use crate::domain::session::SessionStore;
use crate::handlers::picker::UserPicker;
use crate::usecase::bearer::AfterBearerValidate;

/// Shared application state passed to every handler via axum `State`.
///
/// Everything here is immutable after startup; concurrent reads need no
/// synchronization beyond the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<UserRegistry>,
    pub sessions: Arc<dyn SessionStore>,
    pub picker: Arc<dyn UserPicker>,
    pub sign_in_uri: String,
    pub sign_out_uri: String,
    pub after_bearer_validate: Option<AfterBearerValidate>,
}
