pub mod access_jwt;
pub mod authenticator;
pub mod credentials;
pub mod factory;
pub mod jwt;
pub mod token_issuer;

pub use access_jwt::AccessTokenVerifier;
pub use authenticator::AuthService;
pub use factory::{build_auth_service, build_verifier};
