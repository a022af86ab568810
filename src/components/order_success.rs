use leptos::prelude::*;

use crate::models::Page;
use crate::state::use_shop;

/// Confirmation shown after checkout has cleared the cart.
#[component]
pub fn OrderSuccessPage() -> impl IntoView {
    let state = use_shop();

    view! {
        <section class="order-success">
            <div class="success-mark">"✓"</div>
            <h1>"Thank you for your order!"</h1>
            {move || {
                state.last_order_id().map(|order_id| {
                    view! {
                        <p class="order-id">"Order number: " <strong>{order_id}</strong></p>
                    }
                })
            }}
            <p>"We are packing your items and will call to confirm delivery."</p>
            <div class="success-actions">
                <button class="cta" on:click=move |_| state.navigate(Page::Shop)>
                    "Keep shopping"
                </button>
                <button class="ghost" on:click=move |_| state.navigate(Page::Home)>
                    "Back to home"
                </button>
            </div>
        </section>
    }
}
