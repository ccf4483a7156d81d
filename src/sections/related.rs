//! Related products grid.

use leptos::prelude::*;

use crate::data::Product;
use crate::sections::pricing::format_rupees;
use crate::sections::reviews::star_row;

/// Drop the current product from a category query result and cap the
/// remainder at `limit` entries.
pub fn filter_related(products: Vec<Product>, current_id: &str, limit: usize) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.id != current_id)
        .take(limit)
        .collect()
}

/// Grid of related product cards. Renders nothing when empty.
#[component]
pub fn RelatedProducts(related: ReadSignal<Vec<Product>>) -> impl IntoView {
    view! {
        {move || {
            let products = related.get();
            (!products.is_empty())
                .then(|| {
                    view! {
                        <section class="related-products">
                            <h2>"Related Soaps"</h2>
                            <div class="related-grid">
                                {products.into_iter().map(related_card).collect::<Vec<_>>()}
                            </div>
                        </section>
                    }
                })
        }}
    }
}

fn related_card(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let image = product.primary_image_url().map(str::to_string);
    let price = format_rupees(product.price);
    let stars = star_row(product.display_rating());

    view! {
        <article class="related-card">
            <a href=href class="related-link">
                <div class="related-image">
                    {match image {
                        Some(url) => view! { <img src=url alt=product.name.clone()/> }.into_any(),
                        None => view! { <span class="related-placeholder">"\u{1f9fc}"</span> }.into_any(),
                    }}
                </div>
                <div class="related-info">
                    <h3 class="related-name">{product.name.clone()}</h3>
                    <p class="related-description">{product.description.clone()}</p>
                    <div class="related-meta">
                        <span class="related-price">{price}</span>
                        <span class="related-stars">{stars}</span>
                    </div>
                </div>
            </a>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Soap {id}"),
            description: String::new(),
            price: 500.0,
            original_price: None,
            discount: None,
            stock: 5,
            rating: None,
            review_count: None,
            images: Vec::new(),
            category: Some("soap".to_string()),
            features: None,
        }
    }

    #[test]
    fn test_filter_excludes_current_product() {
        let result = filter_related(vec![product("p1"), product("p2"), product("p3")], "p2", 4);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.id != "p2"));
    }

    #[test]
    fn test_filter_caps_at_limit() {
        let products = (0..6).map(|i| product(&format!("p{i}"))).collect();
        let result = filter_related(products, "none", 4);
        assert_eq!(result.len(), 4);
    }
}
