//! Visitor contact form and the admin lead overview.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use effekt_db::models::contact::CreateContactRequest;
use effekt_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 4000, message = "Message is required"))]
    pub message: String,
    /// Optional stage context ("Volkswagen Golf GTI — Steg 1") carried
    /// over when the form opens from a stage card.
    #[validate(length(max = 200))]
    pub stage_label: Option<String>,
    #[validate(length(max = 120))]
    pub branch: Option<String>,
    #[validate(length(max = 500))]
    pub page_url: Option<String>,
}

/// POST /api/v1/contact
///
/// Stores the lead, then notifies over SMTP when a mailer is
/// configured. A failed send is logged; the visitor still gets a 201.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<impl IntoResponse> {
    form.validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let lead = ContactRepo::create(
        &state.pool,
        &CreateContactRequest {
            name: form.name,
            email: form.email,
            phone: form.phone,
            message: form.message,
            stage_label: form.stage_label,
            branch: form.branch,
            page_url: form.page_url,
        },
    )
    .await?;

    if let Some(mailer) = &state.mailer {
        if let Err(err) = mailer.send_contact_lead(&lead).await {
            tracing::warn!(lead_id = lead.id, error = %err, "Contact lead email failed");
        }
    }

    tracing::info!(lead_id = lead.id, "Stored contact request");
    Ok((StatusCode::CREATED, Json(DataResponse { data: lead })))
}

#[derive(Debug, Deserialize)]
pub struct RecentLeadsParams {
    pub limit: Option<i64>,
}

/// GET /api/v1/contact/recent
pub async fn recent_leads(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    axum::extract::Query(params): axum::extract::Query<RecentLeadsParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(50).clamp(1, 500);
    let leads = ContactRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: leads }))
}
