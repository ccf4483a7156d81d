//! Application shell, layout, and routes.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::cart::{provide_cart, use_cart};
use crate::notify::{provide_toaster, ToastViewport};
use crate::pages::{ProductDetailPage, ProductsPage};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_cart();
    provide_toaster();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta
            name="description"
            content="Premium natural soaps from MoringaCare. Organic moringa and tea tree oil for healthy, nourished skin."
        />
        <Title text="MoringaCare Natural Soaps"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/product/:id") view=ProductDetailPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
            <ToastViewport/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let cart = use_cart();

    view! {
        <header class="site-header">
            <h1>"MoringaCare"</h1>
            <nav>
                <a href="/">"Home"</a>
                <a href="/products">"Products"</a>
                <span class="cart-indicator">
                    "Cart"
                    <span class="cart-count">{move || cart.count().to_string()}</span>
                </span>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"MoringaCare Natural Soaps - handcrafted in Pakistan"</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Home page with hero section.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h2>"Welcome to MoringaCare"</h2>
            <p>"Premium natural soaps with organic moringa and tea tree oil"</p>
            <a href="/products" class="btn">"Browse Soaps"</a>
        </div>
    }
}

/// 404 page.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
