//! No-op token protection.
//!
//! Host authentication pipelines expect a (de)serialization primitive for
//! their access-token tickets. This tool never protects anything: the
//! primitive exists only to satisfy that contract. `protect` always fails,
//! and `unprotect` always yields an empty scheme-tagged identity.

use crate::domain::types::Identity;
use crate::error::StandinError;

#[derive(Debug, Clone, Default)]
pub struct NoOpTokenFormat;

impl NoOpTokenFormat {
    /// Always refuses to produce protected output.
    pub fn protect(&self, _identity: &Identity) -> Result<String, StandinError> {
        Err(StandinError::TokenProtectionNotSupported)
    }

    /// Always unprotects to an identity with no claims.
    pub fn unprotect(&self, _protected: &str) -> Identity {
        Identity::empty()
    }
}
