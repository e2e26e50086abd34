use axum::Json;
use axum::extract::State;

use crate::api::dto::authentication::{AuthenticationRequest, AuthenticationResponse};
use crate::api::extractors::Validated;
use crate::error::AppError;
use crate::state::AppState;

/// POST /authentication/authenticate
///
/// 200 with `{token}` on a match, otherwise a 401 problem body that does not
/// say which credential was wrong.
pub async fn authenticate(
    State(state): State<AppState>,
    Validated(req): Validated<AuthenticationRequest>,
) -> Result<Json<AuthenticationResponse>, AppError> {
    let issued = state
        .auth
        .authenticate(&req.user_name, &req.last_name, req.password)
        .await?;

    Ok(Json(AuthenticationResponse {
        token: issued.token,
    }))
}
