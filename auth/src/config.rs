//! Token signing configuration.

use error::AuthError;

/// Environment variable holding the shared signing secret.
pub const SECRET_ENV: &str = "AUTH_SECRET";

/// Environment variable holding the token lifetime in minutes.
pub const LIFETIME_ENV: &str = "AUTH_TOKEN_TTL_MINUTES";

/// Token lifetime used when none is configured.
pub const DEFAULT_LIFETIME_MINUTES: i64 = 5;

/// Shared configuration for token issuance and verification.
///
/// Loaded once at process start and passed into [`TokenIssuer`] and
/// [`TokenVerifier`] constructors; never re-read per call. Issuer and
/// verifier must hold the identical secret or verification always fails.
///
/// [`TokenIssuer`]: crate::TokenIssuer
/// [`TokenVerifier`]: crate::TokenVerifier
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Token validity duration in minutes
    pub lifetime_minutes: i64,
}

impl AuthConfig {
    /// Create a configuration with an explicit secret and lifetime.
    pub fn new(secret: impl Into<String>, lifetime_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            lifetime_minutes,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// An absent lifetime falls back to [`DEFAULT_LIFETIME_MINUTES`], but a
    /// lifetime that is set and not an integer fails with
    /// [`AuthError::Unknown`]: a present-but-broken value is a setup bug,
    /// not something to paper over with a default.
    pub fn from_env() -> Result<Self, AuthError> {
        let secret = std::env::var(SECRET_ENV).unwrap_or_default();

        let lifetime_minutes = match std::env::var(LIFETIME_ENV) {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                tracing::error!("{} is set but is not an integer", LIFETIME_ENV);
                AuthError::Unknown
            })?,
            Err(_) => DEFAULT_LIFETIME_MINUTES,
        };

        Ok(Self {
            secret,
            lifetime_minutes,
        })
    }

    /// The secret as key bytes, or [`AuthError::Configuration`] when empty.
    pub(crate) fn require_secret(&self) -> Result<&[u8], AuthError> {
        if self.secret.is_empty() {
            tracing::error!("signing secret is missing");
            return Err(AuthError::Configuration);
        }
        Ok(self.secret.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = AuthConfig::new("s3cret", 5);
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.lifetime_minutes, 5);
        assert_eq!(config.require_secret().unwrap(), b"s3cret");
    }

    #[test]
    fn test_empty_secret_is_configuration_error() {
        let config = AuthConfig::new("", 5);
        assert_eq!(config.require_secret().unwrap_err(), AuthError::Configuration);
    }

    // All from_env cases live in one test because env vars are process-wide
    // and tests in this binary run in parallel.
    #[test]
    fn test_from_env_lifetime_policy() {
        std::env::set_var(SECRET_ENV, "s3cret");

        std::env::remove_var(LIFETIME_ENV);
        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.lifetime_minutes, DEFAULT_LIFETIME_MINUTES);

        std::env::set_var(LIFETIME_ENV, "30");
        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.lifetime_minutes, 30);

        std::env::set_var(LIFETIME_ENV, "five");
        assert_eq!(AuthConfig::from_env().unwrap_err(), AuthError::Unknown);

        std::env::remove_var(LIFETIME_ENV);
        std::env::remove_var(SECRET_ENV);
    }
}
