// catalog_server/src/web/handlers/product_handlers.rs

use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use catalog::{parse_product_id, PageRequest, Product, ProductInput};
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::state::AppState;

/// Raw `page` / `limit` values. Repeated keys keep their first occurrence.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListProductsQuery {
  pub page: Option<String>,
  pub limit: Option<String>,
}

impl ListProductsQuery {
  /// Never fails: a query string that cannot be decoded counts as empty.
  pub fn from_query_string(query: &str) -> Self {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
      .map(web::Query::into_inner)
      .unwrap_or_default();
    let first = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone());
    ListProductsQuery {
      page: first("page"),
      limit: first("limit"),
    }
  }

  pub fn page_request(&self) -> PageRequest {
    PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
  }
}

#[instrument(name = "handler::list_products", skip(app_state, req), fields(query = %req.query_string()))]
pub async fn list_products_handler(app_state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
  let page = ListProductsQuery::from_query_string(req.query_string()).page_request();
  let products: Vec<Product> = app_state.store.list(page).await?;

  info!(
    page = page.page(),
    limit = page.limit(),
    "Successfully fetched {} products.",
    products.len()
  );
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
  let id = parse_product_id(&path)?;

  match app_state.store.get(id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product with ID {} not found.", id);
      Err(AppError::NotFound("Product not found".to_string()))
    }
  }
}

#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  body: web::Json<ProductInput>,
) -> Result<HttpResponse> {
  let id = parse_product_id(&path)?;

  // Zero rows affected is still reported as success.
  let affected = app_state.store.update(id, &body).await?;
  if affected == 0 {
    warn!("Update matched no product with ID {}.", id);
  } else {
    info!("Product {} updated.", id);
  }

  Ok(HttpResponse::Ok()
    .content_type(ContentType::plaintext())
    .body("Product updated successfully"))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
  let id = parse_product_id(&path)?;

  let affected = app_state.store.delete(id).await?;
  if affected == 0 {
    warn!("Delete matched no product with ID {}.", id);
  } else {
    info!("Product {} deleted.", id);
  }

  Ok(HttpResponse::Ok()
    .content_type(ContentType::plaintext())
    .body("Product deleted successfully"))
}
