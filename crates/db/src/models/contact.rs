//! Contact request (lead) rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use effekt_core::types::{DbId, Timestamp};

/// A row from the `contact_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactRequestRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub stage_label: Option<String>,
    pub branch: Option<String>,
    pub page_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for storing a new contact request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub stage_label: Option<String>,
    pub branch: Option<String>,
    pub page_url: Option<String>,
}
