use std::sync::Arc;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::auth::credentials::Identity;
use crate::services::auth::jwt::JwtSigner;
use crate::services::clock::Clock;

/// Issued tokens are valid for exactly one hour.
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub given_name: String,
    pub family_name: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: AccessTokenClaims,
}

#[derive(Clone)]
pub struct TokenIssuer {
    jwt: JwtSigner,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(jwt: JwtSigner, clock: Arc<dyn Clock>) -> Self {
        Self { jwt, clock }
    }

    /// Build and sign the claim set for an authenticated employee.
    ///
    /// Deterministic for a given identity, clock reading and configuration.
    pub fn issue(&self, identity: &Identity) -> Result<IssuedToken, AppError> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + Duration::seconds(ACCESS_TOKEN_TTL_SECONDS);

        let claims = AccessTokenClaims {
            iss: self.jwt.issuer().to_string(),
            aud: self.jwt.audience().to_string(),
            sub: identity.employee_id.to_string(),
            given_name: identity.first_name.clone(),
            family_name: identity.last_name.clone(),
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = self.jwt.sign(&claims)?;
        Ok(IssuedToken { token, claims })
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").field("jwt", &self.jwt).finish()
    }
}
