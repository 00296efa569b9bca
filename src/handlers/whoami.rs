use axum::Json;

use crate::domain::types::Identity;
use crate::extract::CurrentUser;

/// Handler for `GET /whoami` — echo the resolved identity, 401 otherwise.
pub async fn whoami(CurrentUser(identity): CurrentUser) -> Json<Identity> {
    Json(identity)
}
