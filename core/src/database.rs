// catalog/src/database.rs

//! The storage handle: one PostgreSQL pool, opened at process start and closed at exit.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::{info, instrument};

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    #[default]
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            other => Err(CatalogError::Config(format!("Unknown SSL mode '{}'", other))),
        }
    }
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Allow => PgSslMode::Allow,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
            SslMode::VerifyCa => PgSslMode::VerifyCa,
            SslMode::VerifyFull => PgSslMode::VerifyFull,
        }
    }
}

/// Connection parameters for the product database.
#[derive(Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub ssl_mode: SslMode,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Full connection URL. Takes precedence over the discrete fields when set.
    pub url: Option<String>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "products_db".to_string(),
            ssl_mode: SslMode::Disable,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            url: None,
        }
    }
}

// The password never reaches logs.
impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .field("ssl_mode", &self.ssl_mode.as_str())
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("url", &self.url.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> CatalogResult<PgConnectOptions> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url)
                .map_err(|e| CatalogError::Config(format!("Invalid database URL: {}", e)));
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database)
            .ssl_mode(self.ssl_mode.into());
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        Ok(options)
    }
}

/// Opens the pool and verifies the server answers before handing it out.
#[instrument(name = "database::connect", skip(settings), fields(host = %settings.host, database = %settings.database))]
pub async fn connect(settings: &DatabaseSettings) -> CatalogResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(settings.connect_options()?)
        .await?;

    ping(&pool).await?;
    info!("Successfully connected to the database.");
    Ok(pool)
}

/// Liveness probe: one round trip to the server.
pub async fn ping(pool: &PgPool) -> CatalogResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Closes the pool, waiting for checked-out connections to be returned.
pub async fn close(pool: PgPool) {
    pool.close().await;
    info!("Database connection closed successfully.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssl_mode_parses_case_insensitively() {
        assert_eq!("Disable".parse::<SslMode>().unwrap(), SslMode::Disable);
        assert_eq!("verify-full".parse::<SslMode>().unwrap(), SslMode::VerifyFull);
        assert!(matches!("tls".parse::<SslMode>(), Err(CatalogError::Config(_))));
    }

    #[test]
    fn debug_redacts_password() {
        let settings = DatabaseSettings {
            password: "khushi".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("khushi"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("acquire_timeout: 30s"));
    }

    #[test]
    fn invalid_url_is_config_error() {
        let settings = DatabaseSettings {
            url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(settings.connect_options(), Err(CatalogError::Config(_))));
    }
}
