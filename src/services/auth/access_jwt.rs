use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

// Errors returned by access-token verification + strict claim validation.
#[derive(Debug)]
pub enum AccessJwtError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
    IssuedInFuture,
    InvalidSubject,
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
            Self::IssuedInFuture => write!(f, "'iat' is in the future"),
            Self::InvalidSubject => write!(f, "invalid 'sub' (expected employee id)"),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Claims read back from a bearer token.
///
/// `iss`/`aud`/`exp`/`nbf` are enforced by `jsonwebtoken::Validation` on the raw
/// payload, so only what the application reads is kept here; the rest
/// is checked in [`AccessTokenVerifier::verify_strict`].
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub sub: String,

    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
}

/// Verified, application-facing view of a bearer token.
#[derive(Debug, Clone)]
pub struct VerifiedAccessToken {
    pub employee_id: i32,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

/// HS256 access-token verifier.
#[derive(Clone)]
pub struct AccessTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AccessTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AccessTokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AccessTokenVerifier {
    pub fn new(secret: &[u8], issuer: &str, audience: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.validate_nbf = true;
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    // Verify and decode a JWT access token.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify + strict claim validation.
    ///
    /// On top of signature, `iss`, `aud`, `exp` and `nbf`, this rejects empty
    /// `iss`/`sub` and an `iat` later than now (plus leeway).
    pub fn verify_strict(&self, token: &str) -> Result<AccessTokenClaims, AccessJwtError> {
        let claims = self.verify(token)?;

        if claims.iss.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("iss"));
        }
        if claims.sub.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("sub"));
        }
        if let Some(iat) = claims.iat {
            let now = chrono::Utc::now().timestamp();
            if iat > now + self.validation.leeway as i64 {
                return Err(AccessJwtError::IssuedInFuture);
            }
        }

        Ok(claims)
    }

    /// Entry point for the middleware: strict verification, then the subject
    /// promoted to an employee id.
    pub fn verify_verified(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
        let claims = self.verify_strict(token)?;

        let employee_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AccessJwtError::InvalidSubject)?;

        Ok(VerifiedAccessToken {
            employee_id,
            given_name: claims.given_name,
            family_name: claims.family_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use jsonwebtoken::errors::ErrorKind;

    use crate::services::auth::credentials::Identity;
    use crate::services::auth::jwt::JwtSigner;
    use crate::services::auth::token_issuer::TokenIssuer;
    use crate::services::clock::FixedClock;

    const SECRET: &[u8] = b"verifier-test-secret-0123456789abcdef";
    const ISSUER: &str = "restaurant-api";
    const AUDIENCE: &str = "restaurant-clients";

    fn token(secret: &[u8], issuer: &str, audience: &str, issued_ago: Duration) -> String {
        let issuer = TokenIssuer::new(
            JwtSigner::new(secret, issuer.into(), audience.into()),
            Arc::new(FixedClock(Utc::now() - issued_ago)),
        );
        let identity = Identity {
            employee_id: 7,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
        };
        issuer.issue(&identity).unwrap().token
    }

    fn verifier() -> AccessTokenVerifier {
        AccessTokenVerifier::new(SECRET, ISSUER, AUDIENCE, 0)
    }

    fn jwt_kind(err: AccessJwtError) -> ErrorKind {
        match err {
            AccessJwtError::Jwt(e) => e.into_kind(),
            other => panic!("expected jwt error, got {other}"),
        }
    }

    #[test]
    fn accepts_fresh_token() {
        let t = token(SECRET, ISSUER, AUDIENCE, Duration::seconds(5));
        let verified = verifier().verify_verified(&t).unwrap();
        assert_eq!(verified.employee_id, 7);
        assert_eq!(verified.given_name.as_deref(), Some("Grace"));
        assert_eq!(verified.family_name.as_deref(), Some("Hopper"));
    }

    #[test]
    fn rejects_foreign_signature() {
        let t = token(b"some-other-key-entirely-000000000", ISSUER, AUDIENCE, Duration::zero());
        let err = verifier().verify_verified(&t).unwrap_err();
        assert!(matches!(jwt_kind(err), ErrorKind::InvalidSignature));
    }

    #[test]
    fn rejects_wrong_issuer() {
        let t = token(SECRET, "someone-else", AUDIENCE, Duration::zero());
        let err = verifier().verify_verified(&t).unwrap_err();
        assert!(matches!(jwt_kind(err), ErrorKind::InvalidIssuer));
    }

    #[test]
    fn rejects_wrong_audience() {
        let t = token(SECRET, ISSUER, "other-clients", Duration::zero());
        let err = verifier().verify_verified(&t).unwrap_err();
        assert!(matches!(jwt_kind(err), ErrorKind::InvalidAudience));
    }

    #[test]
    fn rejects_expired_token() {
        let t = token(SECRET, ISSUER, AUDIENCE, Duration::minutes(61));
        let err = verifier().verify_verified(&t).unwrap_err();
        assert!(matches!(jwt_kind(err), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn rejects_token_not_yet_valid() {
        let t = token(SECRET, ISSUER, AUDIENCE, Duration::minutes(-10));
        let err = verifier().verify_verified(&t).unwrap_err();
        assert!(matches!(jwt_kind(err), ErrorKind::ImmatureSignature));
    }

    #[test]
    fn rejects_garbage() {
        assert!(verifier().verify_verified("not.a.jwt").is_err());
        assert!(verifier().verify_verified("").is_err());
    }
}
