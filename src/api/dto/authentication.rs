use serde::{Deserialize, Serialize};

/// Request body for `/authentication/authenticate`.
///
/// `password` is the employee id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthenticationRequest {
    pub user_name: String,
    pub last_name: String,
    pub password: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationResponse {
    pub token: String,
}
