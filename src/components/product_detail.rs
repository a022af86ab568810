use leptos::prelude::*;

use crate::models::{Page, Product};
use crate::state::use_shop;

/// Detail view for the product picked from a grid.
///
/// The quantity picker stays inside `1..=stock`; the cart itself never
/// looks at stock, so this is the only place the bound applies.
#[component]
pub fn ProductDetailPage(product: Product) -> impl IntoView {
    let state = use_shop();
    let quantity = RwSignal::new(1_u32);
    let stock = product.stock;
    let purchasable = product.in_stock();

    let decrement = move |_| {
        quantity.update(|q| {
            if *q > 1 {
                *q -= 1;
            }
        });
    };
    let increment = move |_| {
        quantity.update(|q| {
            if *q < stock {
                *q += 1;
            }
        });
    };

    let addable = product.clone();
    let add_to_cart = move |_| {
        state.add_to_cart(&addable, quantity.get());
        quantity.set(1);
    };

    view! {
        <section class="product-detail">
            <button class="back-link" on:click=move |_| state.navigate(Page::Shop)>
                "Back to shop"
            </button>
            <div class="detail-layout">
                <img class="detail-image" src=product.image.clone() alt=product.name.clone() />
                <div class="detail-info">
                    <h1>{product.name.clone()}</h1>
                    <p class="product-meta">
                        {product.category.label()} " for " {product.pet_type.label()}
                    </p>
                    <p class="detail-price">{product.price_display()}</p>
                    <p class="detail-description">{product.description.clone()}</p>
                    <p class="stock-note">
                        {if purchasable {
                            format!("{stock} in stock")
                        } else {
                            "Out of stock".to_string()
                        }}
                    </p>
                    <Show when=move || purchasable>
                        <div class="quantity-picker">
                            <button on:click=decrement>"−"</button>
                            <span class="quantity-value">{move || quantity.get()}</span>
                            <button on:click=increment>"+"</button>
                        </div>
                    </Show>
                    <button class="add-to-cart" disabled=!purchasable on:click=add_to_cart>
                        {if purchasable { "Add to cart" } else { "Out of stock" }}
                    </button>
                </div>
            </div>
        </section>
    }
}
