use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roles::Role;

/// Session token claims (transport-agnostic).
///
/// This is the minimal set of claims expected once a token has been decoded
/// and signature-verified by the transport layer. Timestamps are unix
/// seconds, matching the usual JWT registered claim names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (the identity provider's id for the caller).
    pub sub: String,

    /// RBAC roles granted to the subject.
    pub roles: Vec<Role>,

    /// Issued-at, unix seconds.
    pub iat: i64,

    /// Expiration, unix seconds.
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,

    #[error("token is malformed or has a bad signature")]
    Malformed,
}

/// Deterministically validate session claims.
///
/// Signature verification / decoding is handled by [`crate::jwt`]; this only
/// checks the claim time window against the supplied clock.
pub fn validate_claims(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    let now = now.timestamp();
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
