//! Data models and the catalog API client.

pub mod api;
pub mod product;

pub use api::{fetch_product, fetch_products, fetch_related, ApiError};
pub use product::{ImageRef, Product};
