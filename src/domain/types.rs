use serde::{Deserialize, Serialize};

/// Authentication-scheme label shared by the bearer and session surfaces.
pub const STANDIN_SCHEME: &str = "StandinAuthentication";

/// Query-string key selecting a user directly, bypassing the picker page.
pub const OVERRIDE_USER_ID_KEY: &str = "OverrideUserId";

/// Query-string key carrying the post-sign-in/out redirect destination.
pub const RETURN_URL_KEY: &str = "ReturnUrl";

/// Claim type carrying the user's display name.
pub const NAME_CLAIM: &str = "name";

/// Claim type carrying the presented bearer token (bearer path only).
pub const ACCESS_TOKEN_CLAIM: &str = "access_token";

/// A single (type, value) claim pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// A simulated user. Immutable once handed to the registry.
///
/// `access_token` is optional: users without one can only sign in through
/// the picker/override flow, never via an Authorization header.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            access_token: None,
            claims: Vec::new(),
        }
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn claim(mut self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.push(Claim::new(claim_type, value));
        self
    }
}

/// Resolved per-request (or per-session) identity: the matched user's claims
/// tagged with the authentication scheme they were established under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub scheme: String,
    pub claims: Vec<Claim>,
}

impl Identity {
    /// Identity for a validated bearer token: the presented token itself,
    /// the display name, then the user's configured claims.
    pub fn bearer(user: &User, token: &str) -> Self {
        let mut claims = vec![
            Claim::new(ACCESS_TOKEN_CLAIM, token),
            Claim::new(NAME_CLAIM, &user.name),
        ];
        claims.extend(user.claims.iter().cloned());
        Self {
            scheme: STANDIN_SCHEME.to_owned(),
            claims,
        }
    }

    /// Session-only identity established by the override flow. Carries no
    /// `access_token` claim.
    pub fn session(user: &User) -> Self {
        let mut claims = vec![Claim::new(NAME_CLAIM, &user.name)];
        claims.extend(user.claims.iter().cloned());
        Self {
            scheme: STANDIN_SCHEME.to_owned(),
            claims,
        }
    }

    /// Scheme-tagged identity with no claims at all.
    pub fn empty() -> Self {
        Self {
            scheme: STANDIN_SCHEME.to_owned(),
            claims: Vec::new(),
        }
    }

    /// First claim value of the given type, if any.
    pub fn claim(&self, claim_type: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|c| c.claim_type == claim_type)
            .map(|c| c.value.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.claim(NAME_CLAIM)
    }
}
