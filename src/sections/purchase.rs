//! Quantity selection and the add-to-cart action.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, set_timeout};
use leptos::prelude::*;

use crate::cart::use_cart;
use crate::data::Product;
use crate::notify::use_toaster;

/// How often the add-to-cart button shakes for attention.
pub const SHAKE_INTERVAL: Duration = Duration::from_secs(6);

/// How long each shake lasts.
pub const SHAKE_DURATION: Duration = Duration::from_secs(1);

/// Apply a quantity delta, clamped to `[1, stock]`.
///
/// A delta that would leave the range is a no-op; with zero stock the
/// quantity never moves.
pub fn apply_delta(current: u32, delta: i64, stock: u32) -> u32 {
    let next = current as i64 + delta;
    if next >= 1 && next <= stock as i64 {
        next as u32
    } else {
        current
    }
}

/// Quantity selector, stock badge, and add-to-cart button.
///
/// The attention-cue interval is acquired on mount and released in
/// `on_cleanup`, so it dies with the component.
#[component]
pub fn PurchasePanel(product: Product) -> impl IntoView {
    let cart = use_cart();
    let toaster = use_toaster();

    let stock = product.stock;
    let out_of_stock = product.is_out_of_stock();
    let stock_label = product.stock_label();
    let stock_class = product.stock_class();

    let (quantity, set_quantity) = signal(1u32);
    let (shake, set_shake) = signal(false);

    if let Ok(handle) = set_interval_with_handle(
        move || {
            set_shake.set(true);
            set_timeout(move || set_shake.set(false), SHAKE_DURATION);
        },
        SHAKE_INTERVAL,
    ) {
        on_cleanup(move || handle.clear());
    }

    let adjust = move |delta: i64| {
        set_quantity.update(|q| *q = apply_delta(*q, delta, stock));
    };

    let on_add = move |_| {
        if out_of_stock {
            return;
        }
        let count = quantity.get_untracked();
        // One dispatch per unit; the cart context merges the lines.
        for _ in 0..count {
            cart.add_to_cart(&product);
        }
        toaster.success(format!("{} {}(s) added to cart!", count, product.name));
    };

    view! {
        <div class="purchase-panel">
            <h3>"Quantity"</h3>
            <div class="quantity-row">
                <div class="quantity-stepper">
                    <button
                        class="quantity-btn"
                        aria-label="Decrease quantity"
                        disabled=move || quantity.get() <= 1 || out_of_stock
                        on:click=move |_| adjust(-1)
                    >
                        "\u{2212}"
                    </button>
                    <span class="quantity-value">{move || quantity.get().to_string()}</span>
                    <button
                        class="quantity-btn"
                        aria-label="Increase quantity"
                        disabled=move || quantity.get() >= stock || out_of_stock
                        on:click=move |_| adjust(1)
                    >
                        "+"
                    </button>
                </div>
                <span class=format!("stock-badge {stock_class}")>{stock_label}</span>
            </div>
            <button
                class="btn-add-to-cart"
                class=("btn-add-to-cart--disabled", move || out_of_stock)
                class=("shake", move || shake.get())
                disabled=out_of_stock
                on:click=on_add
            >
                {if out_of_stock { "Out of Stock" } else { "Add to Cart" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_clamps_to_stock() {
        // stock 3, quantity starts at 1: two increments reach 3, a third is a no-op
        let mut quantity = 1;
        quantity = apply_delta(quantity, 1, 3);
        quantity = apply_delta(quantity, 1, 3);
        assert_eq!(quantity, 3);
        assert_eq!(apply_delta(quantity, 1, 3), 3);
    }

    #[test]
    fn test_delta_never_goes_below_one() {
        assert_eq!(apply_delta(1, -1, 3), 1);
        assert_eq!(apply_delta(2, -1, 3), 1);
    }

    #[test]
    fn test_zero_stock_is_frozen() {
        assert_eq!(apply_delta(1, 1, 0), 1);
        assert_eq!(apply_delta(1, -1, 0), 1);
    }

    #[test]
    fn test_large_deltas_are_noops() {
        assert_eq!(apply_delta(2, 10, 3), 2);
        assert_eq!(apply_delta(2, -10, 3), 2);
    }
}
