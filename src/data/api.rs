//! Catalog API client.
//!
//! Thin typed wrapper over the browser `fetch` API. Every endpoint
//! returns an envelope object; the client unwraps it and surfaces
//! failures as [`ApiError`].

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::product::Product;

/// Base path of the catalog REST API.
pub const API_BASE: &str = "/api";

/// How many related products to request per category.
pub const RELATED_LIMIT: usize = 4;

/// Errors surfaced by the catalog API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("response was not valid UTF-8")]
    Utf8,
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ProductEnvelope {
    product: Product,
}

#[derive(Deserialize)]
struct ProductListEnvelope {
    #[serde(default)]
    products: Vec<Product>,
}

/// URL for a single product.
pub fn product_url(id: &str) -> String {
    format!("{API_BASE}/products/{id}")
}

/// URL for the full product listing.
pub fn products_url() -> String {
    format!("{API_BASE}/products")
}

/// URL for a limited category query.
pub fn related_url(category: &str, limit: usize) -> String {
    format!("{API_BASE}/products?category={category}&limit={limit}")
}

/// Fetch one product by id.
pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    let body = get_text(&product_url(id)).await?;
    let envelope: ProductEnvelope = serde_json::from_str(&body)?;
    Ok(envelope.product)
}

/// Fetch the full product listing.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let body = get_text(&products_url()).await?;
    let envelope: ProductListEnvelope = serde_json::from_str(&body)?;
    Ok(envelope.products)
}

/// Fetch up to `limit` products in a category.
pub async fn fetch_related(category: &str, limit: usize) -> Result<Vec<Product>, ApiError> {
    let body = get_text(&related_url(category, limit)).await?;
    let envelope: ProductListEnvelope = serde_json::from_str(&body)?;
    Ok(envelope.products)
}

/// Issue a GET request and return the response body as text.
async fn get_text(url: &str) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Request("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| ApiError::Request(js_error_message(&err)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|err| ApiError::Request(js_error_message(&err)))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = JsFuture::from(
        response
            .text()
            .map_err(|err| ApiError::Request(js_error_message(&err)))?,
    )
    .await
    .map_err(|err| ApiError::Request(js_error_message(&err)))?;

    text.as_string().ok_or(ApiError::Utf8)
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_builders() {
        assert_eq!(product_url("p1"), "/api/products/p1");
        assert_eq!(products_url(), "/api/products");
        assert_eq!(related_url("soap", 4), "/api/products?category=soap&limit=4");
    }

    #[test]
    fn test_product_envelope_parsing() {
        let envelope: ProductEnvelope = serde_json::from_str(
            r#"{"product": {"_id": "p1", "name": "Lavender Bar", "price": 500, "stock": 3}}"#,
        )
        .unwrap();
        assert_eq!(envelope.product.id, "p1");
        assert_eq!(envelope.product.stock, 3);
    }

    #[test]
    fn test_list_envelope_defaults_to_empty() {
        let envelope: ProductListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.products.is_empty());
    }
}
