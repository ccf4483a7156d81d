//! MoringaCare Storefront
//!
//! Client-side rendered storefront for the MoringaCare natural soap shop.
//! The centerpiece is the product detail page:
//! - Typed API client over the catalog REST endpoints
//! - Image gallery with wrap-around navigation
//! - Stock-clamped quantity selection and add-to-cart
//! - Toast notifications and a client-side cart context

pub mod app;
pub mod cart;
pub mod data;
pub mod notify;
pub mod pages;
pub mod sections;
