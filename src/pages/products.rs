//! Product listing page.

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::data::{self, Product};
use crate::notify::use_toaster;
use crate::sections::pricing::format_rupees;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let toaster = use_toaster();

    Effect::new(move |_| {
        spawn_local(async move {
            match data::fetch_products().await {
                Ok(list) => set_products.set(list),
                Err(err) => {
                    logging::error!("product listing fetch failed: {err}");
                    toaster.error("Unable to load products");
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <Title text="Products | MoringaCare Natural Soaps"/>
        <div class="products-page">
            <h2>"All Soaps"</h2>
            {move || {
                if loading.get() {
                    return view! {
                        <div class="page-center">
                            <span class="spinner spinner--xl"></span>
                        </div>
                    }
                    .into_any();
                }
                let list = products.get();
                if list.is_empty() {
                    return view! { <p class="products-empty">"No products available."</p> }
                        .into_any();
                }
                view! {
                    <div class="products-grid">
                        {list.into_iter().map(product_card).collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

fn product_card(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let image = product.primary_image_url().map(str::to_string);
    let price = format_rupees(product.price);
    let stock_label = product.stock_label();
    let stock_class = product.stock_class();

    view! {
        <article class="product-card">
            <a href=href>
                <div class="product-card-image">
                    {match image {
                        Some(url) => view! { <img src=url alt=product.name.clone()/> }.into_any(),
                        None => view! { <span class="related-placeholder">"\u{1f9fc}"</span> }.into_any(),
                    }}
                </div>
                <div class="product-card-info">
                    <h3>{product.name.clone()}</h3>
                    <p class="product-card-price">{price}</p>
                    <span class=format!("stock-badge {stock_class}")>{stock_label}</span>
                </div>
            </a>
        </article>
    }
}
