use leptos::prelude::*;

use crate::components::{
    AboutPage, AdminPage, BlogDetailPage, BlogPage, CartPage, CheckoutPage, ContactPage, Footer,
    Header, HomePage, LoginPage, OrderSuccessPage, ProductDetailPage, ShopPage,
};
use crate::models::Page;
use crate::state::ShopState;

/// Root component. Restores the persisted session, owns it for the whole
/// tree via context, and switches the visible page view.
#[component]
pub fn App() -> impl IntoView {
    let state = ShopState::restore();
    provide_context(state);

    // Page switches are in-memory state changes, so mimic real navigation
    // by scrolling back to the top on every switch.
    Effect::new(move |_| {
        let _ = state.page();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    // Detail pages guard their selection and render empty when nothing is
    // selected; the UI cannot get there without selecting, but a missing
    // selection must not crash.
    view! {
        <div class="shop-app">
            <Header />
            <main class="page-content">
                {move || match state.page() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Login => view! { <LoginPage /> }.into_any(),
                    Page::Admin => view! { <AdminPage /> }.into_any(),
                    Page::Shop => view! { <ShopPage /> }.into_any(),
                    Page::ProductDetail => match state.selected_product() {
                        Some(product) => {
                            view! { <ProductDetailPage product=product /> }.into_any()
                        }
                        None => ().into_any(),
                    },
                    Page::Cart => view! { <CartPage /> }.into_any(),
                    Page::Checkout => view! { <CheckoutPage /> }.into_any(),
                    Page::OrderSuccess => view! { <OrderSuccessPage /> }.into_any(),
                    Page::About => view! { <AboutPage /> }.into_any(),
                    Page::Blog => view! { <BlogPage /> }.into_any(),
                    Page::BlogDetail => match state.selected_blog_id() {
                        Some(blog_id) => view! { <BlogDetailPage blog_id=blog_id /> }.into_any(),
                        None => ().into_any(),
                    },
                    Page::Contact => view! { <ContactPage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
