use leptos::prelude::*;

use crate::models::Product;
use crate::state::use_shop;

/// Product tile used by the home and shop grids. The image and name open
/// the detail page; the button adds a single unit.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let state = use_shop();
    let purchasable = product.in_stock();
    let detail = product.clone();
    let addable = product.clone();

    view! {
        <div class="product-card">
            <button class="product-media" on:click=move |_| state.view_product(detail.clone())>
                <img src=product.image.clone() alt=product.name.clone() />
            </button>
            <div class="product-info">
                <p class="product-name">{product.name.clone()}</p>
                <p class="product-meta">
                    {product.category.label()} " · " {product.pet_type.label()}
                </p>
                <p class="product-price">{product.price_display()}</p>
            </div>
            <button
                class="add-to-cart"
                disabled=!purchasable
                on:click=move |_| state.add_to_cart(&addable, 1)
            >
                {if purchasable { "Add to cart" } else { "Out of stock" }}
            </button>
        </div>
    }
}
