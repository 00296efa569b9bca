use std::sync::Arc;

use crate::domain::registry::UserRegistry;
use crate::domain::types::{Identity, User};
use crate::error::StandinError;

/// Everything known about a successful bearer validation, handed to the
/// optional post-validation hook.
#[derive(Debug, Clone)]
pub struct BearerValidation {
    pub token: String,
    pub user: Arc<User>,
    pub identity: Identity,
}

/// Hook invoked after every successful bearer validation.
pub type AfterBearerValidate = Arc<dyn Fn(&BearerValidation) + Send + Sync>;

/// Resolve a raw `Authorization` header value against the registry.
///
/// `Ok(None)` means no bearer credential was supplied (header absent or
/// blank); authentication then falls through to the session cookie. The
/// scheme segment is accepted verbatim — only the two-segment shape and the
/// token itself are checked.
pub fn validate_bearer(
    registry: &UserRegistry,
    header: Option<&str>,
) -> Result<Option<BearerValidation>, StandinError> {
    let Some(header) = header else {
        return Ok(None);
    };
    if header.trim().is_empty() {
        return Ok(None);
    }

    let segments: Vec<&str> = header.split(' ').collect();
    if segments.len() != 2 || segments[1].trim().is_empty() {
        return Err(StandinError::MalformedAuthorization);
    }

    let token = segments[1];
    let user = registry
        .find_by_token(token)
        .ok_or_else(|| StandinError::UnknownAccessToken(token.to_owned()))?;

    Ok(Some(BearerValidation {
        token: token.to_owned(),
        user: Arc::clone(user),
        identity: Identity::bearer(user, token),
    }))
}
