// catalog_server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use catalog::{database, MemoryProductStore, PgProductStore, ProductStore};
use catalog_server::config::{AppConfig, LogFormat, StorageBackend};
use catalog_server::state::AppState;
use catalog_server::{telemetry, web};
use std::sync::Arc;

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Load application configuration before tracing so LOG_FORMAT can pick the output
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => {
      telemetry::init_tracing(cfg.log_format);
      Arc::new(cfg)
    }
    Err(e) => {
      telemetry::init_tracing(LogFormat::Pretty);
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };
  tracing::info!(database = ?app_config.database, "Starting product catalog server...");

  // Open the storage handle; an unreachable database is fatal
  let store: Arc<dyn ProductStore> = match app_config.storage_backend {
    StorageBackend::Postgres => match database::connect(&app_config.database).await {
      Ok(pool) => Arc::new(PgProductStore::new(pool)),
      Err(e) => {
        tracing::error!(error = %e, "Unable to connect to the database.");
        panic!("Database connection error: {}", e);
      }
    },
    StorageBackend::Memory => {
      tracing::warn!("Using the in-memory product store; data is lost on exit.");
      Arc::new(MemoryProductStore::new())
    }
  };

  let app_state = AppState::new(store.clone());

  // Configure and Start Actix Web Server
  let server_address = app_config.server_address();
  tracing::info!("Server is running on {}...", server_address);

  let served = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await;

  store.close().await;
  served
}
