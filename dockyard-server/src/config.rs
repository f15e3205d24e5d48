//! Service configuration - connection settings and defaults
//!
//! Values normally arrive from the environment through the CLI:
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: Postgres parts
//! - `DATABASE_URL`: full Postgres URL, overrides the parts
//! - `APP_NAME`: display name of a users service instance
//! - `REDIS_URL`: Redis endpoint for the message service

use sqlx::postgres::PgConnectOptions;

/// Display name used when `APP_NAME` is not set
pub const DEFAULT_APP_NAME: &str = "Unknown App";

/// Redis endpoint used when `REDIS_URL` is not set
pub const DEFAULT_REDIS_URL: &str = "redis://redis:6379";

/// Postgres connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            database: "postgres".to_string(),
        }
    }
}

impl DatabaseSettings {
    /// Build sqlx connect options from the individual parts.
    ///
    /// Parts are passed separately rather than formatted into a URL, so
    /// passwords with reserved characters need no escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        match self.password.as_deref() {
            Some(password) if !password.is_empty() => options.password(password),
            _ => options,
        }
    }
}

/// Resolve the display name, falling back to `DEFAULT_APP_NAME` when
/// unset or blank.
pub fn app_name_or_default(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_APP_NAME.to_string(),
    }
}
