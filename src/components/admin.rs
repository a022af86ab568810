use leptos::prelude::*;

use crate::catalog;
use crate::models::Page;
use crate::state::use_shop;

/// Stock level under which a product lands in the restock table.
const LOW_STOCK: u32 = 15;

/// Read-only dashboard over the catalog: headline numbers plus a restock
/// list. There is nothing to administer yet; the catalog is static.
#[component]
pub fn AdminPage() -> impl IntoView {
    let state = use_shop();
    let products = catalog::products();
    let product_count = products.len();
    let stock_units: u32 = products.iter().map(|p| p.stock).sum();
    let inventory_value: f64 = products
        .iter()
        .map(|p| p.price * f64::from(p.stock))
        .sum();
    let low_stock: Vec<_> = products
        .into_iter()
        .filter(|p| p.stock < LOW_STOCK)
        .collect();

    view! {
        <section class="admin-page">
            <h1>"Dashboard"</h1>
            {move || {
                state.user().map(|user| {
                    view! { <p class="admin-greeting">"Signed in as " {user.name.clone()}</p> }
                })
            }}
            <div class="stat-cards">
                <div class="stat-card">
                    <p class="stat-value">{product_count}</p>
                    <p class="stat-label">"Products"</p>
                </div>
                <div class="stat-card">
                    <p class="stat-value">{stock_units}</p>
                    <p class="stat-label">"Units in stock"</p>
                </div>
                <div class="stat-card">
                    <p class="stat-value">{format!("${inventory_value:.2}")}</p>
                    <p class="stat-label">"Inventory value"</p>
                </div>
            </div>
            <h2>"Needs restocking"</h2>
            <table class="stock-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"Category"</th>
                        <th>"Stock"</th>
                    </tr>
                </thead>
                <tbody>
                    {low_stock
                        .into_iter()
                        .map(|product| {
                            view! {
                                <tr class=("stock-out", product.stock == 0)>
                                    <td>{product.name.clone()}</td>
                                    <td>{product.category.label()}</td>
                                    <td>{product.stock}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <button class="ghost" on:click=move |_| state.navigate(Page::Home)>
                "View the store"
            </button>
        </section>
    }
}
