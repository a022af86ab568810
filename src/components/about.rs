use leptos::prelude::*;

use crate::models::Page;
use crate::state::use_shop;

/// Company story page. Static content with one way back into the shop.
#[component]
pub fn AboutPage() -> impl IntoView {
    let state = use_shop();

    view! {
        <section class="about-page">
            <h1>"About Gaumeo Shop"</h1>
            <p>
                "Gaumeo started in 2019 as a single shelf of cat food in a Hanoi \
                 coffee shop. The regulars kept asking where we got it, so we \
                 opened a store, then a second one, and eventually this site."
            </p>
            <p>
                "We stock what we feed our own animals. Every food and medicine \
                 on these pages has been reviewed by the two vets on our team, \
                 and anything that fails them never makes the catalog."
            </p>
            <div class="value-cards">
                <div class="value-card">
                    <p class="value-title">"Picked by owners"</p>
                    <p>"Every buyer on the team lives with at least one cat or dog."</p>
                </div>
                <div class="value-card">
                    <p class="value-title">"Honest labels"</p>
                    <p>"We publish full ingredient lists, including the boring parts."</p>
                </div>
                <div class="value-card">
                    <p class="value-title">"Local first"</p>
                    <p>"Most of our range comes from producers within the country."</p>
                </div>
            </div>
            <button class="cta" on:click=move |_| state.navigate(Page::Shop)>
                "See what we carry"
            </button>
        </section>
    }
}
