// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog::ProductInput;
use once_cell::sync::Lazy;
use tracing::Level;

// --- Common Fixtures ---
pub fn pen() -> ProductInput {
  ProductInput {
    user_id: 1,
    product_name: "Pen".to_string(),
    product_description: "Blue ink".to_string(),
    product_images: vec!["a.jpg".to_string()],
    product_price: 1.5,
  }
}

pub fn numbered_input(n: i64) -> ProductInput {
  ProductInput {
    user_id: n,
    product_name: format!("Product {}", n),
    product_description: format!("Description {}", n),
    product_images: vec![format!("{}-front.jpg", n), format!("{}-back.jpg", n)],
    product_price: n as f64 + 0.25,
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

/// Connection URL for the PostgreSQL integration tests. They are skipped when unset.
pub fn test_database_url() -> Option<String> {
  std::env::var("CATALOG_TEST_DATABASE_URL").ok().filter(|v| !v.is_empty())
}
