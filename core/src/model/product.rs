// catalog/src/model/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{CatalogError, CatalogResult};

/// One persisted product row. `id` is assigned by the store on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub user_id: i64,
    pub product_name: String,
    pub product_description: String,
    pub product_images: Vec<String>,
    pub product_price: f64,
}

/// Write shape for create and update: every column except `id`.
///
/// An `id` sent by the client is ignored, since unknown fields are skipped on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub user_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub product_images: Vec<String>,
    pub product_price: f64,
}

impl ProductInput {
    /// Merges a store-assigned id into the input, producing the persisted view.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            user_id: self.user_id,
            product_name: self.product_name,
            product_description: self.product_description,
            product_images: self.product_images,
            product_price: self.product_price,
        }
    }
}

impl From<Product> for ProductInput {
    fn from(product: Product) -> Self {
        ProductInput {
            user_id: product.user_id,
            product_name: product.product_name,
            product_description: product.product_description,
            product_images: product.product_images,
            product_price: product.product_price,
        }
    }
}

/// Parses a product id taken from a URL path segment. Surrounding whitespace is ignored.
pub fn parse_product_id(raw: &str) -> CatalogResult<i64> {
    raw.trim().parse::<i64>().map_err(|e| CatalogError::InvalidId {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}
