//! Routed pages.

pub mod product_detail;
pub mod products;

pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
