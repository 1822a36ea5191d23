// catalog_server/src/web/routes.rs

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::product_handlers;

// Probes the store so orchestrators see a dead database as an unhealthy instance.
async fn health_check_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state.store.ping().await.map_err(|e| {
    warn!(error = %e, "Health check failed.");
    AppError::Unavailable("Storage is unreachable".to_string())
  })?;
  Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  warn!(error = %err, "Error decoding product.");
  AppError::Validation("Invalid request body".to_string()).into()
}

/// Accepts bodies regardless of Content-Type; malformed JSON is a 400 with the app's error body.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .content_type_required(false)
    .error_handler(json_error_handler)
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    // Product Routes
    .route(
      "/create-product",
      web::post().to(product_handlers::create_product_handler),
    )
    .route(
      "/get-products",
      web::get().to(product_handlers::list_products_handler),
    )
    .service(
      web::resource("/products/{id}")
        .route(web::get().to(product_handlers::get_product_handler))
        .route(web::put().to(product_handlers::update_product_handler))
        .route(web::delete().to(product_handlers::delete_product_handler)),
    );
}
