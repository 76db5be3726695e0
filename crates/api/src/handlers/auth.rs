//! Admin login.
//!
//! There is exactly one admin principal; the password is verified
//! against the configured Argon2 hash and a short-lived JWT comes back.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use effekt_core::error::CoreError;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in_mins: i64,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if !verify_password(&payload.password, &state.config.admin_password_hash) {
        tracing::warn!("Failed admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let access_token = generate_access_token(&state.config.jwt)
        .map_err(|err| AppError::InternalError(format!("Token generation failed: {err}")))?;

    tracing::info!("Admin logged in");
    Ok(Json(DataResponse {
        data: LoginResponse {
            access_token,
            token_type: "Bearer",
            expires_in_mins: state.config.jwt.access_token_expiry_mins,
        },
    }))
}
