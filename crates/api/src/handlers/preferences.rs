//! UI preference endpoints (currently just the language choice).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use effekt_core::prefs;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const SUPPORTED_LANGUAGES: &[&str] = &["sv", "en"];
const DEFAULT_LANGUAGE: &str = "sv";

#[derive(Debug, Serialize)]
pub struct LanguagePreference {
    pub language: String,
}

/// GET /api/v1/preferences/language
pub async fn get_language(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let language = state
        .prefs
        .get(prefs::KEY_LANGUAGE)
        .await
        .map_err(AppError::Core)?
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    Ok(Json(DataResponse {
        data: LanguagePreference { language },
    }))
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub language: String,
}

/// PUT /api/v1/preferences/language
///
/// Admin-only: the language choice is a site-wide setting, not a
/// per-visitor one.
pub async fn set_language(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<SetLanguageRequest>,
) -> AppResult<impl IntoResponse> {
    let language = payload.language.trim().to_lowercase();
    if !SUPPORTED_LANGUAGES.contains(&language.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported language '{language}', expected one of: {}",
            SUPPORTED_LANGUAGES.join(", ")
        )));
    }

    state
        .prefs
        .set(prefs::KEY_LANGUAGE, &language)
        .await
        .map_err(AppError::Core)?;

    Ok(Json(DataResponse {
        data: LanguagePreference { language },
    }))
}
