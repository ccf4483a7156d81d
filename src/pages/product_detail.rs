//! Product detail page.
//!
//! Fetches one product by the `:id` route parameter, then up to four
//! related products from the same category. All view state is replaced
//! wholesale whenever the identifier changes.

use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::data::api::RELATED_LIMIT;
use crate::data::{self, Product};
use crate::notify::use_toaster;
use crate::sections::related::filter_related;
use crate::sections::reviews::star_row;
use crate::sections::{ImageGallery, PriceBlock, PurchasePanel, RelatedProducts, ReviewPanel};

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());

    let (product, set_product) = signal(None::<Product>);
    let (related, set_related) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);

    let toaster = use_toaster();

    Effect::new(move |_| {
        let id = product_id.get();
        set_product.set(None);
        set_related.set(Vec::new());
        set_loading.set(true);

        spawn_local(async move {
            let fetched = data::fetch_product(&id).await;
            // Each request is tagged with the id it was issued for; a
            // response whose tag no longer matches the route is dropped.
            if product_id.get_untracked() != id {
                return;
            }

            let product = match fetched {
                Ok(product) => product,
                Err(err) => {
                    logging::error!("product fetch failed for {id}: {err}");
                    toaster.error("Product not found");
                    set_loading.set(false);
                    return;
                }
            };

            // The loading indicator covers the primary fetch only.
            set_loading.set(false);
            let category = product.category.clone();
            set_product.set(Some(product));

            let Some(category) = category else { return };
            match data::fetch_related(&category, RELATED_LIMIT).await {
                Ok(products) => {
                    if product_id.get_untracked() != id {
                        return;
                    }
                    set_related.set(filter_related(products, &id, RELATED_LIMIT));
                }
                Err(err) => {
                    logging::warn!("related products fetch failed for {id}: {err}");
                    toaster.error("Product not found");
                }
            }
        });
    });

    view! {
        <Title text=move || {
            product
                .get()
                .map(|p| format!("{} | MoringaCare Natural Soaps", p.name))
                .unwrap_or_else(|| "Soap Details | MoringaCare".to_string())
        }/>
        <Meta
            name="description"
            content=move || {
                product
                    .get()
                    .filter(|p| !p.description.is_empty())
                    .map(|p| p.description)
                    .unwrap_or_else(|| {
                        "Premium natural soap from MoringaCare. Organic moringa and tea tree oil for healthy, nourished skin."
                            .to_string()
                    })
            }
        />
        {move || {
            if loading.get() {
                return view! { <LoadingScreen/> }.into_any();
            }
            match product.get() {
                Some(p) => view! { <ProductView product=p related=related/> }.into_any(),
                None => view! { <ProductNotFound/> }.into_any(),
            }
        }}
    }
}

/// Full page body once the product has loaded. Child components own the
/// gallery and quantity state, so a new product remounts them fresh.
#[component]
fn ProductView(product: Product, related: ReadSignal<Vec<Product>>) -> impl IntoView {
    let features = product.features.clone().unwrap_or_default();
    let stars = star_row(product.display_rating());
    let review_label = format!("({} reviews)", product.display_review_count());

    view! {
        <div class="pdp">
            <nav class="breadcrumb">
                <a href="/">"Home"</a>
                <span>"/"</span>
                <a href="/products">"Products"</a>
                <span>"/"</span>
                <span class="breadcrumb-current">{product.name.clone()}</span>
            </nav>
            <a href="/products" class="back-link">"\u{2190} Back to Products"</a>

            <div class="pdp-grid">
                <ImageGallery images=product.images.clone() name=product.name.clone()/>
                <div class="product-info">
                    <h1 class="product-name">{product.name.clone()}</h1>
                    <div class="rating-row">
                        <span class="rating-stars">{stars}</span>
                        <span class="rating-count">{review_label}</span>
                    </div>
                    <PriceBlock
                        price=product.price
                        original_price=product.original_price
                        discount=product.discount
                    />
                    <div class="product-description">
                        <h3>"Description"</h3>
                        <p>{product.description.clone()}</p>
                    </div>
                    {(!features.is_empty())
                        .then(|| {
                            view! {
                                <div class="product-features">
                                    <h3>"Key Features"</h3>
                                    <ul>
                                        {features
                                            .iter()
                                            .map(|feature| view! { <li>{feature.clone()}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })}
                    <PurchasePanel product=product.clone()/>
                    <div class="assurance-grid">
                        <div class="assurance-tile assurance-tile--delivery">
                            <p class="assurance-title">"Free Delivery"</p>
                            <p class="assurance-detail">"All over Pakistan"</p>
                        </div>
                        <div class="assurance-tile assurance-tile--quality">
                            <p class="assurance-title">"Quality Guarantee"</p>
                            <p class="assurance-detail">"100% authentic"</p>
                        </div>
                    </div>
                </div>
            </div>

            <ReviewPanel
                product_id=product.id.clone()
                rating=product.display_rating()
                review_count=product.display_review_count()
            />
            <RelatedProducts related=related/>
        </div>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="page-center">
            <span class="spinner spinner--xl"></span>
            <p>"Loading product..."</p>
        </div>
    }
}

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <h2>"Soap not found"</h2>
            <a href="/products">"Back to Soaps"</a>
        </div>
    }
}
