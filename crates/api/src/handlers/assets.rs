//! Admin image upload.
//!
//! Uploads arrive as base64 payloads in JSON rather than multipart —
//! the admin UI already holds the file in memory as a data URL. The
//! decoded bytes must parse as an image before anything touches disk.

use std::io::Cursor;
use std::path::Path;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use effekt_core::normalize::slugify;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum decoded upload size, 10 MiB.
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct UploadImageRequest {
    /// Original filename, used (sanitized) in the stored name.
    pub filename: String,
    /// Base64-encoded image bytes. A `data:image/...;base64,` prefix
    /// is tolerated and stripped.
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct UploadedImage {
    pub url: String,
    pub filename: String,
    pub width: u32,
    pub height: u32,
}

/// POST /api/v1/assets/images
pub async fn upload_image(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<UploadImageRequest>,
) -> AppResult<impl IntoResponse> {
    let encoded = payload
        .data
        .rsplit_once("base64,")
        .map(|(_, rest)| rest)
        .unwrap_or(&payload.data);

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| AppError::BadRequest("Image data is not valid base64".into()))?;

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(AppError::BadRequest(format!(
            "Image exceeds the {} MiB limit",
            MAX_IMAGE_BYTES / (1024 * 1024)
        )));
    }

    let format = image::guess_format(&bytes)
        .map_err(|_| AppError::BadRequest("Unrecognized image format".into()))?;
    // Header-only read; the payload is stored as-is, never re-encoded.
    let (width, height) = image::ImageReader::with_format(Cursor::new(&bytes), format)
        .into_dimensions()
        .map_err(|_| AppError::BadRequest("Image data could not be decoded".into()))?;

    let extension = format.extensions_str().first().copied().unwrap_or("bin");
    let stem = Path::new(&payload.filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(slugify)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "image".to_string());
    let stored_name = format!("{stem}-{}.{extension}", Uuid::new_v4());

    let dir = Path::new(&state.config.media_dir);
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|err| AppError::InternalError(format!("Failed to create media dir: {err}")))?;
    tokio::fs::write(dir.join(&stored_name), &bytes)
        .await
        .map_err(|err| AppError::InternalError(format!("Failed to store image: {err}")))?;

    tracing::info!(filename = %stored_name, bytes = bytes.len(), "Stored uploaded image");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadedImage {
                url: format!("{}/{stored_name}", state.config.media_base_url),
                filename: stored_name,
                width,
                height,
            },
        }),
    ))
}
