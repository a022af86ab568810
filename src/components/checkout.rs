use leptos::prelude::*;

use crate::models::{Order, Page, ShippingAddress};
use crate::state::use_shop;

/// Current browser time as an ISO-8601 string.
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Order ids come from the browser clock. Good enough for a single-tab
/// shop with no backend to collide with.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn generate_order_id() -> String {
    format!("ORD-{}", js_sys::Date::now() as u64)
}

/// Checkout page: delivery form next to an order summary. Placing the
/// order builds it from the cart, then hands the id to the session, which
/// empties the cart and shows the confirmation page.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let state = use_shop();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let place_order = move |_| {
        let shipping = ShippingAddress {
            name: name.get().trim().to_string(),
            phone: phone.get().trim().to_string(),
            address: address.get().trim().to_string(),
            city: city.get().trim().to_string(),
        };
        if shipping.name.is_empty()
            || shipping.phone.is_empty()
            || shipping.address.is_empty()
            || shipping.city.is_empty()
        {
            form_error.set(Some("Please fill in every delivery field.".to_string()));
            return;
        }
        // Guest checkouts are allowed; they get the placeholder user id.
        let user_id = state.user().map_or(0, |user| user.id);
        let order = Order::new(
            generate_order_id(),
            user_id,
            state.cart_items(),
            now_iso(),
            shipping,
        );
        web_sys::console::log_1(
            &format!(
                "order {} placed: {} line(s), ${:.2}",
                order.id,
                order.items.len(),
                order.total
            )
            .into(),
        );
        state.checkout(order.id);
    };

    view! {
        <section class="checkout-page">
            <h1>"Checkout"</h1>
            <Show
                when=move || !state.cart_is_empty()
                fallback=move || {
                    view! {
                        <div class="cart-empty">
                            <p>"There is nothing to check out yet."</p>
                            <button class="cta" on:click=move |_| state.navigate(Page::Shop)>
                                "Browse the shop"
                            </button>
                        </div>
                    }
                }
            >
                <div class="checkout-layout">
                    <form class="shipping-form" on:submit=move |ev| ev.prevent_default()>
                        <h2>"Delivery details"</h2>
                        <label>
                            "Full name"
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Phone"
                            <input
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Street address"
                            <input
                                type="text"
                                prop:value=move || address.get()
                                on:input=move |ev| address.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "City"
                            <input
                                type="text"
                                prop:value=move || city.get()
                                on:input=move |ev| city.set(event_target_value(&ev))
                            />
                        </label>
                        {move || {
                            form_error
                                .get()
                                .map(|message| view! { <p class="form-error">{message}</p> })
                        }}
                        <button class="cta" on:click=place_order>
                            "Place order"
                        </button>
                    </form>
                    <aside class="order-summary">
                        <h2>"Order summary"</h2>
                        <For
                            each=move || state.cart_items()
                            key=|item| (item.product.id, item.quantity)
                            children=move |item| {
                                view! {
                                    <p class="summary-line">
                                        {format!("{} × {}", item.quantity, item.product.name)}
                                        <span>{format!("${:.2}", item.line_total())}</span>
                                    </p>
                                }
                            }
                        />
                        <p class="cart-subtotal">
                            "Total: " {move || format!("${:.2}", state.cart_total())}
                        </p>
                    </aside>
                </div>
            </Show>
        </section>
    }
}
