// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use catalog::{CatalogError, CatalogResult, PageRequest, Product, ProductInput, ProductStore};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tracing::Level;

/// Builds the full application around `$store` and initializes it as a test service.
macro_rules! test_app {
  ($store:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new(catalog_server::AppState::new($store)))
        .configure(catalog_server::web::configure_app_routes),
    )
    .await
  };
}

// --- Common Fixtures ---
pub fn pen_json() -> Value {
  json!({
    "user_id": 1,
    "product_name": "Pen",
    "product_description": "Blue ink",
    "product_images": ["a.jpg"],
    "product_price": 1.5
  })
}

pub fn numbered_json(n: i64) -> Value {
  json!({
    "user_id": n,
    "product_name": format!("Product {}", n),
    "product_description": format!("Description {}", n),
    "product_images": [format!("{}.jpg", n)],
    "product_price": n as f64 * 2.0
  })
}

// --- A store whose every statement fails, as if the database went away ---
pub struct UnreachableStore;

fn connection_lost() -> CatalogError {
  CatalogError::from(sqlx::Error::PoolClosed)
}

#[async_trait]
impl ProductStore for UnreachableStore {
  async fn create(&self, _input: &ProductInput) -> CatalogResult<Product> {
    Err(connection_lost())
  }

  async fn list(&self, _page: PageRequest) -> CatalogResult<Vec<Product>> {
    Err(connection_lost())
  }

  async fn get(&self, _id: i64) -> CatalogResult<Option<Product>> {
    Err(connection_lost())
  }

  async fn update(&self, _id: i64, _input: &ProductInput) -> CatalogResult<u64> {
    Err(connection_lost())
  }

  async fn delete(&self, _id: i64) -> CatalogResult<u64> {
    Err(connection_lost())
  }

  async fn ping(&self) -> CatalogResult<()> {
    Err(connection_lost())
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
