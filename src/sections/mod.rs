//! Product detail page sections.

pub mod gallery;
pub mod pricing;
pub mod purchase;
pub mod related;
pub mod reviews;

pub use gallery::ImageGallery;
pub use pricing::PriceBlock;
pub use purchase::PurchasePanel;
pub use related::RelatedProducts;
pub use reviews::ReviewPanel;
