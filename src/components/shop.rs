use leptos::prelude::*;

use crate::catalog;
use crate::components::ProductCard;
use crate::models::{Category, PetType};

/// Shop grid with category and pet filters. `None` in a filter signal
/// means "everything"; the two filters combine.
#[component]
pub fn ShopPage() -> impl IntoView {
    let category_filter = RwSignal::new(None::<Category>);
    let pet_filter = RwSignal::new(None::<PetType>);

    let filtered = move || {
        catalog::products()
            .into_iter()
            .filter(|p| category_filter.get().map_or(true, |c| p.category == c))
            .filter(|p| pet_filter.get().map_or(true, |wanted| p.pet_type.suits(wanted)))
            .collect::<Vec<_>>()
    };

    view! {
        <section class="shop-page">
            <h1>"Shop"</h1>
            <div class="filter-bar">
                <div class="filter-group">
                    <span class="filter-label">"Category"</span>
                    <button
                        class="filter-option"
                        class:selected=move || category_filter.get().is_none()
                        on:click=move |_| category_filter.set(None)
                    >
                        "All"
                    </button>
                    {Category::ALL
                        .iter()
                        .map(|&category| {
                            view! {
                                <button
                                    class="filter-option"
                                    class:selected=move || category_filter.get() == Some(category)
                                    on:click=move |_| category_filter.set(Some(category))
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="filter-group">
                    <span class="filter-label">"Pet"</span>
                    <button
                        class="filter-option"
                        class:selected=move || pet_filter.get().is_none()
                        on:click=move |_| pet_filter.set(None)
                    >
                        "All"
                    </button>
                    {[PetType::Cat, PetType::Dog]
                        .iter()
                        .map(|&pet| {
                            view! {
                                <button
                                    class="filter-option"
                                    class:selected=move || pet_filter.get() == Some(pet)
                                    on:click=move |_| pet_filter.set(Some(pet))
                                >
                                    {pet.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <Show
                when=move || !filtered().is_empty()
                fallback=|| {
                    view! { <p class="empty-note">"No products match these filters."</p> }
                }
            >
                <div class="product-grid">
                    <For
                        each=filtered
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>
            </Show>
        </section>
    }
}
