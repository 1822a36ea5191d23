// catalog/src/model/mod.rs

//! Data structures representing rows of the `products` table and the shapes
//! accepted by the write operations.

pub mod product;

pub use product::{parse_product_id, Product, ProductInput};
