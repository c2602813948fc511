//! Common error types for token issuance and authorization.
//!
//! This crate provides the failure taxonomy shared by the issuance,
//! verification, and gating paths, plus the client-facing error encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication and authorization failures.
///
/// Every failure in the token path is classified as one of these variants;
/// raw parser or crypto errors never cross the crate boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The signing secret is missing or empty. A service-side fault, not a
    /// client error.
    #[error("signing secret is not configured")]
    Configuration,

    /// The configured token lifetime is present but not a valid integer.
    /// Treated as an unrecoverable setup bug.
    #[error("malformed token lifetime configuration")]
    Unknown,

    /// The cryptographic library failed while signing a token.
    #[error("token signing failed: {0}")]
    Signing(String),

    /// Missing, malformed, invalid, expired, not-yet-valid, or
    /// wrong-algorithm credential. The variants are deliberately collapsed
    /// so the response does not reveal which check failed.
    #[error("unauthorized")]
    Unauthorized,

    /// The token is valid but does not carry the required roles.
    #[error("forbidden")]
    Forbidden,
}

impl AuthError {
    /// Whether this failure is a service-side fault rather than a client
    /// error. Internal faults must be encoded as internal errors, never as
    /// auth failures.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AuthError::Configuration | AuthError::Unknown | AuthError::Signing(_)
        )
    }
}

/// Error response for API clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let (code, message) = match &err {
            AuthError::Configuration => ("AUTH_CONFIGURATION", "Service misconfigured"),
            AuthError::Unknown => ("AUTH_UNKNOWN", "Unknown error"),
            AuthError::Signing(_) => ("AUTH_SIGNING_FAILED", "Failed to create token"),
            AuthError::Unauthorized => ("AUTH_UNAUTHORIZED", "Unauthorized"),
            AuthError::Forbidden => ("AUTH_FORBIDDEN", "Access forbidden"),
        };
        match err {
            AuthError::Signing(detail) => Self::new(code, message).with_details(detail),
            _ => Self::new(code, message),
        }
    }
}

/// Result type alias using AuthError.
pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_codes() {
        let resp = ErrorResponse::from(AuthError::Unauthorized);
        assert_eq!(resp.code, "AUTH_UNAUTHORIZED");
        assert!(resp.details.is_none());

        let resp = ErrorResponse::from(AuthError::Forbidden);
        assert_eq!(resp.code, "AUTH_FORBIDDEN");

        let resp = ErrorResponse::from(AuthError::Signing("bad key".to_string()));
        assert_eq!(resp.code, "AUTH_SIGNING_FAILED");
        assert_eq!(resp.details.as_deref(), Some("bad key"));
    }

    #[test]
    fn test_internal_classification() {
        assert!(AuthError::Configuration.is_internal());
        assert!(AuthError::Unknown.is_internal());
        assert!(AuthError::Signing("x".to_string()).is_internal());
        assert!(!AuthError::Unauthorized.is_internal());
        assert!(!AuthError::Forbidden.is_internal());
    }

    #[test]
    fn test_error_response_serialization() {
        let resp = ErrorResponse::new("AUTH_UNAUTHORIZED", "Unauthorized");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], "AUTH_UNAUTHORIZED");
        assert!(json.get("details").is_none());
    }
}
