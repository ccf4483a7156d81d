//! Customer review panel.
//!
//! The review subsystem proper lives elsewhere; this page mounts the
//! panel with a product id and no signed-in user, so it renders the
//! rating summary in anonymous read-only mode.

use leptos::prelude::*;

/// A signed-in customer, when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reviewer {
    pub id: String,
    pub name: String,
}

/// Render a five-star row for a rating, e.g. `★★★★☆`.
pub fn star_row(rating: f32) -> String {
    let filled = rating.ceil().clamp(0.0, 5.0) as usize;
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}

/// Review summary panel for one product.
#[component]
pub fn ReviewPanel(
    product_id: String,
    rating: f32,
    review_count: u32,
    #[prop(optional)] current_user: Option<Reviewer>,
) -> impl IntoView {
    let stars = star_row(rating);
    let count_label = format!("({review_count} reviews)");

    view! {
        <section class="product-reviews" data-product-id=product_id>
            <h2>"Customer Reviews"</h2>
            <div class="reviews-summary">
                <span class="rating-stars">{stars}</span>
                <span class="rating-count">{count_label}</span>
            </div>
            {match current_user {
                Some(user) => view! {
                    <p class="reviews-prompt">{format!("Reviewing as {}", user.name)}</p>
                }
                .into_any(),
                None => view! {
                    <p class="reviews-prompt">"Sign in to write a review."</p>
                }
                .into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_row_rendering() {
        assert_eq!(star_row(4.0), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
        assert_eq!(star_row(0.0), "\u{2606}\u{2606}\u{2606}\u{2606}\u{2606}");
        assert_eq!(star_row(5.0), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}");
        // partial ratings round up, matching how the listing renders them
        assert_eq!(star_row(3.5), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
    }

    #[test]
    fn test_star_row_clamps_out_of_range() {
        assert_eq!(star_row(9.0), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}");
        assert_eq!(star_row(-1.0), "\u{2606}\u{2606}\u{2606}\u{2606}\u{2606}");
    }
}
