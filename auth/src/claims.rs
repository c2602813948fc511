//! Identity and token claim definitions.

use serde::{Deserialize, Serialize};

/// An authenticated identity, as supplied by the upstream identity source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Email address of the subject
    pub email: String,
    /// Stable subject identifier
    pub subject_id: String,
    /// Roles granted to the subject. Order and duplicates are preserved in
    /// the token payload; role matching treats them as a set.
    pub roles: Vec<String>,
}

impl Identity {
    /// Create a new identity.
    pub fn new(
        email: impl Into<String>,
        subject_id: impl Into<String>,
        roles: Vec<String>,
    ) -> Self {
        Self {
            email: email.into(),
            subject_id: subject_id.into(),
            roles,
        }
    }
}

/// JWT claims structure.
///
/// The serde names fix the wire format of the token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject email address
    pub email: String,
    /// Subject identifier
    pub id: String,
    /// Granted roles, as issued
    pub roles: Vec<String>,
    /// Issuer
    pub iss: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Not valid before (Unix timestamp, equals issuance time)
    pub nbf: i64,
}

impl Claims {
    /// Create claims for an identity, valid from now for `lifetime_minutes`.
    pub fn new(identity: &Identity, issuer: impl Into<String>, lifetime_minutes: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            email: identity.email.clone(),
            id: identity.subject_id.clone(),
            roles: identity.roles.clone(),
            iss: issuer.into(),
            exp: now + lifetime_minutes * 60,
            nbf: now,
        }
    }

    /// The identity embedded in these claims.
    pub fn identity(&self) -> Identity {
        Identity {
            email: self.email.clone(),
            subject_id: self.id.clone(),
            roles: self.roles.clone(),
        }
    }
}
