//! Request authorization gate.
//!
//! The gate owns the full per-request decision: extract the bearer
//! credential, verify it, check the role requirement, and hand the caller a
//! typed [`AuthContext`] to forward downstream. The transport and the error
//! encoder stay outside this crate; the gate only classifies.

use error::AuthError;

use crate::claims::Claims;
use crate::roles::has_required_roles;
use crate::token::TokenVerifier;

/// Scheme marker expected on the credential field.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Metadata key for the subject email.
pub const EMAIL_KEY: &str = "email";
/// Metadata key for the subject identifier.
pub const USER_ID_KEY: &str = "user-id";
/// Metadata key for the joined role list.
pub const ROLES_KEY: &str = "roles";

/// Identity facts handed to the protected operation after authorization,
/// so downstream handling can read them without re-verifying the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject email address
    pub email: String,
    /// Subject identifier
    pub subject_id: String,
    /// Granted roles, as carried in the token
    pub roles: Vec<String>,
}

impl AuthContext {
    /// Roles joined with `:`, for transports that carry a single value per
    /// metadata key.
    pub fn joined_roles(&self) -> String {
        self.roles.join(":")
    }

    /// Metadata entries for a transport adapter to attach to the outgoing
    /// request, keyed by the fixed names downstream handlers read.
    pub fn metadata_pairs(&self) -> [(&'static str, String); 3] {
        [
            (EMAIL_KEY, self.email.clone()),
            (USER_ID_KEY, self.subject_id.clone()),
            (ROLES_KEY, self.joined_roles()),
        ]
    }
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            subject_id: claims.id,
            roles: claims.roles,
        }
    }
}

/// Gates a protected operation behind token verification and a role
/// requirement fixed at construction.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    verifier: TokenVerifier,
    required_roles: Vec<String>,
}

impl AuthorizationGate {
    /// Create a gate requiring every role in `required_roles`.
    pub fn new<I, S>(verifier: TokenVerifier, required_roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verifier,
            required_roles: required_roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Authorize a request from the value of its credential field.
    ///
    /// A [`AuthError::Configuration`] fault from the verifier passes
    /// through unchanged so the error encoder reports an internal error
    /// rather than an auth failure. Every other verification problem,
    /// including a missing or malformed credential, collapses to
    /// [`AuthError::Unauthorized`]; a valid token without the required
    /// roles yields [`AuthError::Forbidden`]. No failure is retried.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<AuthContext, AuthError> {
        let token = authorization
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::Unauthorized)?;

        let claims = self.verifier.verify(token).map_err(|e| match e {
            AuthError::Configuration => AuthError::Configuration,
            _ => AuthError::Unauthorized,
        })?;

        if !has_required_roles(&claims.roles, &self.required_roles) {
            tracing::warn!("subject {} lacks a required role", claims.id);
            return Err(AuthError::Forbidden);
        }

        Ok(AuthContext::from(claims))
    }
}
