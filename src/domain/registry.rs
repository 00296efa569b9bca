use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::types::User;
use crate::error::StandinError;

/// Immutable, process-wide set of simulated users.
///
/// Built once at startup and only ever read afterwards, so it is shared as a
/// plain `Arc` with no locking. Lookups go through two indexes (id and
/// access token) whose key uniqueness is enforced at construction time.
#[derive(Debug)]
pub struct UserRegistry {
    users: Vec<Arc<User>>,
    by_id: HashMap<String, Arc<User>>,
    by_token: HashMap<String, Arc<User>>,
}

impl UserRegistry {
    /// Index the given users. Fails on a duplicate id, or a duplicate access
    /// token among the users that have one.
    pub fn new(users: Vec<User>) -> Result<Self, StandinError> {
        let users: Vec<Arc<User>> = users.into_iter().map(Arc::new).collect();

        let mut by_id = HashMap::with_capacity(users.len());
        let mut by_token = HashMap::new();

        for user in &users {
            if by_id.insert(user.id.clone(), Arc::clone(user)).is_some() {
                return Err(StandinError::DuplicateUserId(user.id.clone()));
            }
            if let Some(token) = &user.access_token {
                if by_token.insert(token.clone(), Arc::clone(user)).is_some() {
                    return Err(StandinError::DuplicateAccessToken(token.clone()));
                }
            }
        }

        Ok(Self {
            users,
            by_id,
            by_token,
        })
    }

    /// All users in configuration order (the picker renders them this way).
    pub fn users(&self) -> &[Arc<User>] {
        &self.users
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Arc<User>> {
        self.by_id.get(id)
    }

    pub fn find_by_token(&self, token: &str) -> Option<&Arc<User>> {
        self.by_token.get(token)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
