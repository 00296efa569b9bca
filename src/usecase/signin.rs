use crate::domain::registry::UserRegistry;
use crate::domain::types::Identity;
use crate::error::StandinError;

/// Resolve an override selection into a session identity.
///
/// The result carries the display name and the user's configured claims but
/// no `access_token` claim — an identity established through the picker is
/// session-only.
pub fn establish_session(
    registry: &UserRegistry,
    override_user_id: &str,
) -> Result<Identity, StandinError> {
    let user = registry
        .find_by_id(override_user_id)
        .ok_or_else(|| StandinError::UnknownOverrideUser(override_user_id.to_owned()))?;

    Ok(Identity::session(user))
}
