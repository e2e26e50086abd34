/// Factory: build the auth services from application `Config`.
use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::services::auth::credentials::PgCredentialStore;
use crate::services::auth::jwt::JwtSigner;
use crate::services::auth::token_issuer::TokenIssuer;
use crate::services::auth::{AccessTokenVerifier, AuthService};
use crate::services::clock::SystemClock;

pub fn build_auth_service(config: &Config, db: PgPool) -> Arc<AuthService> {
    let signer = JwtSigner::new(
        &config.auth_signing_key,
        config.auth_issuer.clone(),
        config.auth_audience.clone(),
    );
    let issuer = TokenIssuer::new(signer, Arc::new(SystemClock));

    Arc::new(AuthService::new(
        Arc::new(PgCredentialStore::new(db)),
        issuer,
    ))
}

pub fn build_verifier(config: &Config) -> Arc<AccessTokenVerifier> {
    Arc::new(AccessTokenVerifier::new(
        &config.auth_signing_key,
        &config.auth_issuer,
        &config.auth_audience,
        config.access_token_leeway_seconds,
    ))
}
