//! Token issuance and verification.

use chrono::Utc;
use error::AuthError;
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use jwt::{AlgorithmType, Header, SignWithKey, Token, VerifyWithKey};
use sha2::{Sha256, Sha384, Sha512};

use crate::claims::{Claims, Identity};
use crate::config::AuthConfig;

type HmacSha512 = Hmac<Sha512>;

fn key_error(e: InvalidLength) -> AuthError {
    tracing::error!("failed to create HMAC key: {}", e);
    AuthError::Signing(e.to_string())
}

/// Issues HMAC-signed bearer tokens.
///
/// Stateless apart from the injected [`AuthConfig`]; safe to share and call
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: AuthConfig,
}

impl TokenIssuer {
    /// Create an issuer with the given configuration.
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Issue a signed token for `identity`, valid from now for the
    /// configured lifetime.
    ///
    /// Fails with [`AuthError::Configuration`] when the secret is empty and
    /// with [`AuthError::Signing`] on a crypto-library failure.
    pub fn issue(&self, identity: &Identity, issuer: &str) -> Result<String, AuthError> {
        let secret = self.config.require_secret()?;
        let key = HmacSha512::new_from_slice(secret).map_err(key_error)?;

        let claims = Claims::new(identity, issuer, self.config.lifetime_minutes);
        claims.sign_with_key(&key).map_err(|e| {
            tracing::error!("failed to sign token: {}", e);
            AuthError::Signing(e.to_string())
        })
    }
}

/// Verifies token signatures and temporal validity.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    config: AuthConfig,
}

impl TokenVerifier {
    /// Create a verifier with the given configuration.
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Decode and validate a token, returning its claims.
    ///
    /// A missing secret fails with [`AuthError::Configuration`] so callers
    /// can tell a misconfigured service apart from a bad token. Every
    /// token-shaped failure collapses to [`AuthError::Unauthorized`].
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let secret = self.config.require_secret()?;

        let unverified: Token<Header, Claims, _> =
            Token::parse_unverified(token).map_err(|e| {
                tracing::warn!("failed to parse token: {}", e);
                AuthError::Unauthorized
            })?;

        // Only the HMAC family is trusted, whatever the header declares.
        // Verifying with a key picked from the header would otherwise let an
        // attacker pivot the verifier onto an algorithm it never intended.
        let algorithm = unverified.header().algorithm;
        let verified = match algorithm {
            AlgorithmType::Hs256 => {
                let key = Hmac::<Sha256>::new_from_slice(secret).map_err(key_error)?;
                unverified.verify_with_key(&key)
            }
            AlgorithmType::Hs384 => {
                let key = Hmac::<Sha384>::new_from_slice(secret).map_err(key_error)?;
                unverified.verify_with_key(&key)
            }
            AlgorithmType::Hs512 => {
                let key = Hmac::<Sha512>::new_from_slice(secret).map_err(key_error)?;
                unverified.verify_with_key(&key)
            }
            other => {
                tracing::warn!("unexpected signing algorithm: {:?}", other);
                return Err(AuthError::Unauthorized);
            }
        }
        .map_err(|e| {
            tracing::warn!("failed to verify token: {}", e);
            AuthError::Unauthorized
        })?;

        let claims = verified.claims();
        let now = Utc::now().timestamp();
        if now < claims.nbf || now >= claims.exp {
            tracing::warn!("token outside its validity window");
            return Err(AuthError::Unauthorized);
        }

        Ok(claims.clone())
    }
}
