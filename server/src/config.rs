// catalog_server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use catalog::{DatabaseSettings, SslMode};
use dotenvy::dotenv;
use std::env;

/// Which `ProductStore` backs the HTTP handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  Postgres,
  Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub storage_backend: StorageBackend,
  pub database: DatabaseSettings,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from any variable source. Unset and empty values take defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
    let get_or = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "0.0.0.0");
    let server_port = get_or("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let storage_backend = match get_or("STORAGE_BACKEND", "postgres").to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => StorageBackend::Postgres,
      "memory" => StorageBackend::Memory,
      other => return Err(AppError::Config(format!("Invalid STORAGE_BACKEND '{}'", other))),
    };

    let log_format = match get_or("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
      "json" => LogFormat::Json,
      "pretty" | "text" => LogFormat::Pretty,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}'", other))),
    };

    let defaults = DatabaseSettings::default();
    let database = DatabaseSettings {
      host: get_or("DB_HOST", &defaults.host),
      port: get_or("DB_PORT", &defaults.port.to_string())
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid DB_PORT: {}", e)))?,
      user: get_or("DB_USER", &defaults.user),
      password: get("DB_PASSWORD").unwrap_or_default(),
      database: get_or("DB_NAME", &defaults.database),
      ssl_mode: get_or("DB_SSLMODE", SslMode::default().as_str())
        .parse::<SslMode>()
        .map_err(|e| AppError::Config(format!("Invalid DB_SSLMODE: {}", e)))?,
      max_connections: get_or("DB_MAX_CONNECTIONS", &defaults.max_connections.to_string())
        .parse::<u32>()
        .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?,
      url: get("DATABASE_URL"),
      ..defaults
    };

    Ok(Self {
      server_host,
      server_port,
      storage_backend,
      database,
      log_format,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
