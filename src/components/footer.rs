use leptos::prelude::*;

use crate::state::use_shop;

/// Footer quick links, as (slug, label).
const QUICK_LINKS: &[(&str, &str)] = &[
    ("shop", "Shop"),
    ("about", "About us"),
    ("blog", "Blog"),
    ("contact", "Contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let state = use_shop();

    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-column footer-brand">
                    <p class="footer-title">"Gaumeo Shop"</p>
                    <p>"Food, care and toys for cats and dogs, picked by people who live with them."</p>
                </div>
                <div class="footer-column">
                    <p class="footer-title">"Explore"</p>
                    {QUICK_LINKS
                        .iter()
                        .map(|&(slug, label)| {
                            view! {
                                <button
                                    class="footer-link"
                                    on:click=move |_| state.navigate_slug(slug)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="footer-column">
                    <p class="footer-title">"Visit us"</p>
                    <p>"36 Cau Giay, Hanoi"</p>
                    <p>"Daily 8:00 - 21:00"</p>
                    <p>"hello@gaumeo.shop"</p>
                </div>
            </div>
            <p class="copyright">"© 2025 Gaumeo Shop. All rights reserved."</p>
        </footer>
    }
}
