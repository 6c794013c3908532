use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde::Serialize;
use tracing::error;

use service::auth::{
    domain::{LoginInput, StaffUser},
    errors::AuthError,
};

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct LoginOutput {
    pub success: bool,
    pub token: String,
    pub user: StaffUser,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<LoginOutput>, ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::bad_request("Email and password are required."))?;
    let session = state.auth.login(input).await.map_err(|e| match e {
        AuthError::Validation(msg) => ApiError::bad_request(msg),
        AuthError::Unauthorized => ApiError::unauthorized(e.to_string()),
        AuthError::Repository(_) => {
            error!(error = %e, code = e.code(), "login failed");
            ApiError::internal("An error occurred during login.")
        }
    })?;
    Ok(Json(LoginOutput { success: true, token: session.token, user: session.user }))
}
