// src/lib.rs

//! Catalog: storage layer for a single `products` table.
//!
//! The crate provides:
//!  - The `Product` row type and the `ProductInput` write shape.
//!  - Lenient page/limit handling for listings (`PageRequest`).
//!  - A `ProductStore` trait with a PostgreSQL implementation (sqlx) and an in-memory one.
//!  - The storage handle lifecycle: `database::connect` (with a liveness probe) and `database::close`.

pub mod database;
pub mod error;
pub mod model;
pub mod pagination;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::database::{DatabaseSettings, SslMode};
pub use crate::error::{CatalogError, CatalogResult};
pub use crate::model::{parse_product_id, Product, ProductInput};
pub use crate::pagination::{PageRequest, DEFAULT_LIMIT};
pub use crate::store::{MemoryProductStore, PgProductStore, ProductStore};
