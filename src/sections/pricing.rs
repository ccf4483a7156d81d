//! Pricing display.

use leptos::prelude::*;

/// Format a rupee amount, dropping the decimals for whole values.
pub fn format_rupees(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("Rs. {amount:.0}")
    } else {
        format!("Rs. {amount:.2}")
    }
}

/// Current price, struck-through original price, and discount badge.
///
/// The original price only renders when it actually exceeds the current
/// price; the badge only when the discount is positive.
#[component]
pub fn PriceBlock(
    price: f64,
    original_price: Option<f64>,
    discount: Option<u8>,
) -> impl IntoView {
    let original = original_price
        .filter(|original| *original > price)
        .map(format_rupees);
    let badge = discount
        .filter(|d| *d > 0)
        .map(|d| format!("Save {d}%"));

    view! {
        <div class="price-block">
            <span class="price-current">{format_rupees(price)}</span>
            {original.map(|text| view! { <span class="price-original">{text}</span> })}
            {badge.map(|text| view! { <span class="price-discount">{text}</span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(500.0), "Rs. 500");
        assert_eq!(format_rupees(449.5), "Rs. 449.50");
    }
}
