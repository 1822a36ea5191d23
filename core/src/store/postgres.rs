// catalog/src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, instrument};

use crate::database;
use crate::error::CatalogResult;
use crate::model::{Product, ProductInput};
use crate::pagination::PageRequest;
use crate::store::ProductStore;

// Casts keep INTEGER/BIGINT ids and NUMERIC/FLOAT8 prices decoding into the same Rust types.
// NUMERIC -> FLOAT8 parses the stored digits, so a price written with `price_param` reads back bit-identical.
const PRODUCT_COLUMNS: &str = "id::BIGINT AS id, user_id::BIGINT AS user_id, product_name, \
     product_description, COALESCE(product_images, '{}') AS product_images, \
     product_price::FLOAT8 AS product_price";

/// `ProductStore` over the `products` table.
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// A binary FLOAT8 cast to NUMERIC keeps only 15 significant digits. Sending the shortest
// round-trip text instead preserves every f64 exactly.
fn price_param(price: f64) -> String {
    price.to_string()
}

#[async_trait]
impl ProductStore for PgProductStore {
    #[instrument(name = "store::create", skip(self, input), fields(user_id = input.user_id))]
    async fn create(&self, input: &ProductInput) -> CatalogResult<Product> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (user_id, product_name, product_description, product_images, product_price)
            VALUES ($1, $2, $3, $4, $5::TEXT::NUMERIC)
            RETURNING id::BIGINT
            "#,
        )
        .bind(input.user_id)
        .bind(&input.product_name)
        .bind(&input.product_description)
        .bind(&input.product_images)
        .bind(price_param(input.product_price))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Error saving product: {}", e);
            e
        })?;

        debug!(product_id = id, "Product inserted.");
        Ok(input.clone().into_product(id))
    }

    #[instrument(name = "store::list", skip(self), fields(page = page.page(), limit = page.limit()))]
    async fn list(&self, page: PageRequest) -> CatalogResult<Vec<Product>> {
        let sql = format!("SELECT {} FROM products ORDER BY id ASC LIMIT $1 OFFSET $2", PRODUCT_COLUMNS);
        let products: Vec<Product> = sqlx::query_as(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Error fetching products: {}", e);
                e
            })?;
        Ok(products)
    }

    #[instrument(name = "store::get", skip(self))]
    async fn get(&self, id: i64) -> CatalogResult<Option<Product>> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        let product: Option<Product> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Error fetching product by ID: {}", e);
                e
            })?;
        Ok(product)
    }

    #[instrument(name = "store::update", skip(self, input))]
    async fn update(&self, id: i64, input: &ProductInput) -> CatalogResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET user_id = $1, product_name = $2, product_description = $3, product_images = $4, product_price = $5::TEXT::NUMERIC
            WHERE id = $6
            "#,
        )
        .bind(input.user_id)
        .bind(&input.product_name)
        .bind(&input.product_description)
        .bind(&input.product_images)
        .bind(price_param(input.product_price))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Error updating product: {}", e);
            e
        })?;
        Ok(result.rows_affected())
    }

    #[instrument(name = "store::delete", skip(self))]
    async fn delete(&self, id: i64) -> CatalogResult<u64> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error deleting product: {}", e);
                e
            })?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> CatalogResult<()> {
        database::ping(&self.pool).await
    }

    async fn close(&self) {
        database::close(self.pool.clone()).await;
    }
}
