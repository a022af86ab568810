use leptos::prelude::*;

use crate::models::{CartItem, Page};
use crate::state::use_shop;

/// Cart page: one row per line with quantity controls, a subtotal, and
/// the way into checkout. An empty cart shows a nudge back to the shop.
#[component]
pub fn CartPage() -> impl IntoView {
    let state = use_shop();

    view! {
        <section class="cart-page">
            <h1>"Your cart"</h1>
            <Show
                when=move || !state.cart_is_empty()
                fallback=move || {
                    view! {
                        <div class="cart-empty">
                            <p>"Your cart is empty."</p>
                            <button class="cta" on:click=move |_| state.navigate(Page::Shop)>
                                "Browse the shop"
                            </button>
                        </div>
                    }
                }
            >
                <div class="cart-lines">
                    <For
                        each=move || state.cart_items()
                        key=|item| (item.product.id, item.quantity)
                        children=move |item| view! { <CartLine item=item /> }
                    />
                </div>
                <div class="cart-summary">
                    <p class="cart-subtotal">
                        "Subtotal: " {move || format!("${:.2}", state.cart_total())}
                    </p>
                    <button class="cta" on:click=move |_| state.navigate(Page::Checkout)>
                        "Proceed to checkout"
                    </button>
                    <button class="ghost" on:click=move |_| state.navigate(Page::Shop)>
                        "Continue shopping"
                    </button>
                    <button class="ghost" on:click=move |_| state.clear_cart()>
                        "Clear cart"
                    </button>
                </div>
            </Show>
        </section>
    }
}

/// One cart row. Keyed by (id, quantity) above, so a quantity change
/// rebuilds the row with fresh captures.
#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let state = use_shop();
    let product_id = item.product.id;
    let quantity = item.quantity;

    view! {
        <div class="cart-line">
            <img class="line-image" src=item.product.image.clone() alt=item.product.name.clone() />
            <div class="line-info">
                <p class="product-name">{item.product.name.clone()}</p>
                <p class="product-meta">{item.product.price_display()} " each"</p>
            </div>
            <div class="quantity-picker">
                <button on:click=move |_| {
                    state.update_quantity(product_id, quantity.saturating_sub(1))
                }>"−"</button>
                <span class="quantity-value">{quantity}</span>
                <button on:click=move |_| {
                    state.update_quantity(product_id, quantity + 1)
                }>"+"</button>
            </div>
            <p class="line-total">{format!("${:.2}", item.line_total())}</p>
            <button class="remove-line" on:click=move |_| state.remove_from_cart(product_id)>
                "Remove"
            </button>
        </div>
    }
}
