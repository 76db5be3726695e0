//! Repository for the `contact_requests` table.

use sqlx::PgPool;

use crate::models::contact::{ContactRequestRow, CreateContactRequest};

/// Column list for the `contact_requests` table.
const COLUMNS: &str = "id, name, email, phone, message, stage_label, branch, page_url, created_at";

pub struct ContactRepo;

impl ContactRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactRequest,
    ) -> Result<ContactRequestRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_requests \
                (name, email, phone, message, stage_label, branch, page_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactRequestRow>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(&input.stage_label)
            .bind(&input.branch)
            .bind(&input.page_url)
            .fetch_one(pool)
            .await
    }

    /// Most recent requests, for the admin overview.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ContactRequestRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_requests ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, ContactRequestRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
