use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::claims::{validate_claims, SessionClaims, TokenValidationError};

/// Verifies a bearer token and produces its claims.
///
/// Implementations own signature verification; the claim time window is
/// always checked against the caller-supplied clock so tests stay
/// deterministic.
pub trait TokenValidator: Send + Sync {
    fn validate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionClaims, TokenValidationError>;
}

/// HS256 symmetric-key validator.
pub struct Hs256TokenValidator {
    key: DecodingKey,
}

impl Hs256TokenValidator {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
        }
    }
}

impl TokenValidator for Hs256TokenValidator {
    fn validate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionClaims, TokenValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by validate_claims with an injected clock.
        validation.validate_exp = false;

        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.key, &validation)
            .map_err(|_| TokenValidationError::Malformed)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Role;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};

    fn mint(secret: &str, claims: &SessionClaims) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn fresh_claims(now: DateTime<Utc>) -> SessionClaims {
        SessionClaims {
            sub: "bob@ucsb.edu".to_string(),
            roles: vec![Role::user(), Role::admin()],
            iat: now.timestamp(),
            exp: (now + Duration::minutes(10)).timestamp(),
        }
    }

    #[test]
    fn round_trips_valid_token() {
        let now = Utc::now();
        let claims = fresh_claims(now);
        let token = mint("test-secret", &claims);

        let validator = Hs256TokenValidator::new("test-secret");
        let decoded = validator.validate(&token, now).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn rejects_wrong_secret() {
        let now = Utc::now();
        let token = mint("test-secret", &fresh_claims(now));

        let validator = Hs256TokenValidator::new("other-secret");
        assert_eq!(
            validator.validate(&token, now),
            Err(TokenValidationError::Malformed)
        );
    }

    #[test]
    fn rejects_garbage_token() {
        let validator = Hs256TokenValidator::new("test-secret");
        assert_eq!(
            validator.validate("not-a-jwt", Utc::now()),
            Err(TokenValidationError::Malformed)
        );
    }

    #[test]
    fn rejects_expired_token() {
        let now = Utc::now();
        let claims = fresh_claims(now);
        let token = mint("test-secret", &claims);

        let validator = Hs256TokenValidator::new("test-secret");
        let later = now + Duration::hours(1);
        assert_eq!(
            validator.validate(&token, later),
            Err(TokenValidationError::Expired)
        );
    }
}
