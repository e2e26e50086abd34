use std::sync::Arc;

use tracing::{info, warn};

use crate::error::AppError;
use crate::services::auth::credentials::CredentialStore;
use crate::services::auth::token_issuer::{IssuedToken, TokenIssuer};

/// Credential check followed by token issuance.
///
/// A rejected login never says which of the three inputs was wrong.
#[derive(Clone)]
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    issuer: TokenIssuer,
}

impl AuthService {
    pub fn new(credentials: Arc<dyn CredentialStore>, issuer: TokenIssuer) -> Self {
        Self {
            credentials,
            issuer,
        }
    }

    pub async fn authenticate(
        &self,
        first_name: &str,
        last_name: &str,
        password: i32,
    ) -> Result<IssuedToken, AppError> {
        let identity = self
            .credentials
            .find_by_credentials(first_name, last_name, password)
            .await?;

        let Some(identity) = identity else {
            warn!("authentication rejected");
            return Err(AppError::Unauthorized);
        };

        let issued = self.issuer.issue(&identity)?;
        info!(employee_id = identity.employee_id, "access token issued");
        Ok(issued)
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("issuer", &self.issuer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::services::auth::credentials::{Identity, memory::InMemoryCredentialStore};
    use crate::services::auth::jwt::JwtSigner;
    use crate::services::auth::token_issuer::ACCESS_TOKEN_TTL_SECONDS;
    use crate::services::clock::FixedClock;

    fn service() -> AuthService {
        let store = InMemoryCredentialStore::with(vec![Identity {
            employee_id: 3,
            first_name: "Linus".into(),
            last_name: "Pauling".into(),
        }]);
        let issuer = TokenIssuer::new(
            JwtSigner::new(b"authenticator-test-key-0123456789", "iss".into(), "aud".into()),
            Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap())),
        );
        AuthService::new(Arc::new(store), issuer)
    }

    #[tokio::test]
    async fn matching_credentials_yield_token_for_that_employee() {
        let issued = service().authenticate("Linus", "Pauling", 3).await.unwrap();
        assert_eq!(issued.claims.sub, "3");
        assert_eq!(issued.claims.exp - issued.claims.iat, ACCESS_TOKEN_TTL_SECONDS);
        assert!(!issued.token.is_empty());
    }

    #[tokio::test]
    async fn any_mismatch_is_unauthorized() {
        let svc = service();
        for (first, last, password) in [
            ("Linus", "Pauling", 4),
            ("Linus", "Torvalds", 3),
            ("Ada", "Pauling", 3),
            ("", "", 0),
        ] {
            let err = svc.authenticate(first, last, password).await.unwrap_err();
            assert!(matches!(err, AppError::Unauthorized));
        }
    }
}
