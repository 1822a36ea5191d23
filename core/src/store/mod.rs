// catalog/src/store/mod.rs

//! Product persistence. Every operation maps to exactly one statement against the store.

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::model::{Product, ProductInput};
use crate::pagination::PageRequest;

pub mod memory;
pub mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// Storage operations behind the product HTTP handlers.
///
/// Implementations must be safe to share between concurrently running requests.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts a row and returns it with the id the store assigned.
    async fn create(&self, input: &ProductInput) -> CatalogResult<Product>;

    /// One page of products in ascending id order.
    async fn list(&self, page: PageRequest) -> CatalogResult<Vec<Product>>;

    /// `Ok(None)` when no row has this id.
    async fn get(&self, id: i64) -> CatalogResult<Option<Product>>;

    /// Replaces every column except `id`. Returns the number of rows touched (0 or 1).
    async fn update(&self, id: i64, input: &ProductInput) -> CatalogResult<u64>;

    /// Returns the number of rows removed (0 or 1).
    async fn delete(&self, id: i64) -> CatalogResult<u64>;

    async fn ping(&self) -> CatalogResult<()>;

    /// Releases the underlying handle. Called once at shutdown.
    async fn close(&self) {}
}
