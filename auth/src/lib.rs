//! Bearer token authorization library.
//!
//! This crate issues HMAC-signed JWTs carrying an identity (email, subject
//! id, roles) and gates protected operations by requiring the token's role
//! set to contain every role the operation declares.

mod claims;
mod config;
mod gate;
mod roles;
mod token;

pub use claims::{Claims, Identity};
pub use config::{AuthConfig, DEFAULT_LIFETIME_MINUTES, LIFETIME_ENV, SECRET_ENV};
pub use gate::{AuthContext, AuthorizationGate, BEARER_PREFIX};
pub use roles::has_required_roles;
pub use token::{TokenIssuer, TokenVerifier};
