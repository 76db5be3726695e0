use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret and admin password hash have
/// defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory uploaded images are written to (default: `./media`).
    pub media_dir: String,
    /// Public base URL echoed back for uploaded assets
    /// (default: `http://localhost:3000/media`).
    pub media_base_url: String,
    /// Argon2 hash the admin login password is verified against.
    pub admin_password_hash: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// SMTP delivery for contact leads; `None` disables email.
    pub smtp: Option<SmtpConfig>,
}

/// SMTP settings for contact-lead delivery.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    /// Sender address for outgoing lead emails.
    pub from: String,
    /// Recipient inbox for contact requests.
    pub to: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                        |
    /// |------------------------|--------------------------------|
    /// | `HOST`                 | `0.0.0.0`                      |
    /// | `PORT`                 | `3000`                         |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                           |
    /// | `MEDIA_DIR`            | `./media`                      |
    /// | `MEDIA_BASE_URL`       | `http://localhost:3000/media`  |
    /// | `ADMIN_PASSWORD_HASH`  | **required**                   |
    /// | `SMTP_HOST` etc.       | unset (email disabled)         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let media_dir = std::env::var("MEDIA_DIR").unwrap_or_else(|_| "./media".into());
        let media_base_url = std::env::var("MEDIA_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/media".into());

        let admin_password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .expect("ADMIN_PASSWORD_HASH must be set in the environment");

        let jwt = JwtConfig::from_env();
        let smtp = Self::smtp_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            media_dir,
            media_base_url,
            admin_password_hash,
            jwt,
            smtp,
        }
    }

    /// SMTP settings are all-or-nothing: `SMTP_HOST` enables email and
    /// the remaining variables must then be present.
    fn smtp_from_env() -> Option<SmtpConfig> {
        let host = std::env::var("SMTP_HOST").ok()?;
        Some(SmtpConfig {
            host,
            username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME must be set"),
            password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD must be set"),
            from: std::env::var("SMTP_FROM").expect("SMTP_FROM must be set"),
            to: std::env::var("CONTACT_RECIPIENT").expect("CONTACT_RECIPIENT must be set"),
        })
    }
}
