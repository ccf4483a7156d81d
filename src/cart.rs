//! Client-side shopping cart context.
//!
//! The cart lives in a reactive signal provided at the app root. Pages
//! dispatch units into it one at a time; nothing here talks to the
//! network.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::Product;

/// One line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Shopping cart held in client state.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Add one unit of a product, merging with an existing line.
    pub fn add_unit(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                price: product.price,
                quantity: 1,
            });
        }
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cart total in rupees.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.subtotal()).sum()
    }
}

/// Reactive handle to the cart context.
#[derive(Clone, Copy)]
pub struct CartHandle(RwSignal<Cart>);

impl CartHandle {
    /// Dispatch one unit of a product into the cart.
    pub fn add_to_cart(&self, product: &Product) {
        self.0.update(|cart| cart.add_unit(product));
    }

    /// Reactive unit count, for the header badge.
    pub fn count(&self) -> u32 {
        self.0.with(|cart| cart.item_count())
    }

    /// Reactive snapshot of the cart.
    pub fn get(&self) -> Cart {
        self.0.get()
    }
}

/// Provide the cart context at the app root.
pub fn provide_cart() {
    provide_context(CartHandle(RwSignal::new(Cart::default())));
}

/// Grab the cart context.
pub fn use_cart() -> CartHandle {
    use_context::<CartHandle>().expect("cart context provided at app root")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Soap {id}"),
            description: String::new(),
            price,
            original_price: None,
            discount: None,
            stock: 10,
            rating: None,
            review_count: None,
            images: Vec::new(),
            category: None,
            features: None,
        }
    }

    #[test]
    fn test_add_unit_merges_lines() {
        let mut cart = Cart::default();
        let lavender = product("p1", 500.0);
        let teatree = product("p2", 450.0);

        cart.add_unit(&lavender);
        cart.add_unit(&lavender);
        cart.add_unit(&teatree);

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_cart_total() {
        let mut cart = Cart::default();
        let lavender = product("p1", 500.0);
        cart.add_unit(&lavender);
        cart.add_unit(&lavender);
        cart.add_unit(&product("p2", 450.0));

        assert_eq!(cart.total(), 1450.0);
    }
}
