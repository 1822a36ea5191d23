// catalog/src/store/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::CatalogResult;
use crate::model::{Product, ProductInput};
use crate::pagination::PageRequest;
use crate::store::ProductStore;

#[derive(Debug)]
struct Rows {
    next_id: i64,
    by_id: BTreeMap<i64, Product>,
}

/// Process-local `ProductStore`. Ids start at 1 and are never reused, like a SERIAL column.
#[derive(Debug)]
pub struct MemoryProductStore {
    rows: RwLock<Rows>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        MemoryProductStore {
            rows: RwLock::new(Rows {
                next_id: 1,
                by_id: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, input: &ProductInput) -> CatalogResult<Product> {
        let mut rows = self.rows.write();
        let id = rows.next_id;
        rows.next_id += 1;
        let product = input.clone().into_product(id);
        rows.by_id.insert(id, product.clone());
        debug!(product_id = id, "Product stored in memory.");
        Ok(product)
    }

    async fn list(&self, page: PageRequest) -> CatalogResult<Vec<Product>> {
        let rows = self.rows.read();
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(rows.by_id.values().skip(skip).take(take).cloned().collect())
    }

    async fn get(&self, id: i64) -> CatalogResult<Option<Product>> {
        Ok(self.rows.read().by_id.get(&id).cloned())
    }

    async fn update(&self, id: i64, input: &ProductInput) -> CatalogResult<u64> {
        let mut rows = self.rows.write();
        match rows.by_id.get_mut(&id) {
            Some(existing) => {
                *existing = input.clone().into_product(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> CatalogResult<u64> {
        Ok(self.rows.write().by_id.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> CatalogResult<()> {
        Ok(())
    }
}
