use std::sync::Arc;

use effekt_core::prefs::PreferenceStore;

use crate::config::ServerConfig;
use crate::notifications::email::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: effekt_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Key-value preference store (language, import history).
    pub prefs: Arc<dyn PreferenceStore>,
    /// Contact-lead mailer; `None` when SMTP is not configured.
    pub mailer: Option<Arc<Mailer>>,
}
