use leptos::prelude::*;

use crate::models::Page;
use crate::state::use_shop;

/// Main navigation entries, as (slug, label).
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("shop", "Shop"),
    ("about", "About"),
    ("blog", "Blog"),
    ("contact", "Contact"),
];

/// Top bar: brand, main navigation, cart badge, session controls.
#[component]
pub fn Header() -> impl IntoView {
    let state = use_shop();

    view! {
        <header class="site-header">
            <button class="brand" on:click=move |_| state.navigate(Page::Home)>
                "Gaumeo Shop"
            </button>
            <nav class="main-nav">
                {NAV_LINKS
                    .iter()
                    .map(|&(slug, label)| {
                        view! {
                            <button
                                class="nav-link"
                                class:active=move || state.page().slug() == slug
                                on:click=move |_| state.navigate_slug(slug)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="header-actions">
                <button class="cart-button" on:click=move |_| state.navigate(Page::Cart)>
                    "Cart"
                    <Show when={move || state.cart_count() > 0}>
                        <span class="cart-badge">{move || state.cart_count()}</span>
                    </Show>
                </button>
                {move || match state.user() {
                    Some(user) => {
                        let is_admin = user.is_admin();
                        view! {
                            <div class="session-controls">
                                <span class="user-name">{user.name.clone()}</span>
                                <Show when=move || is_admin>
                                    <button
                                        class="nav-link"
                                        on:click=move |_| state.navigate(Page::Admin)
                                    >
                                        "Admin"
                                    </button>
                                </Show>
                                <button class="logout-button" on:click=move |_| state.logout()>
                                    "Logout"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <button class="login-button" on:click=move |_| state.navigate(Page::Login)>
                                "Sign in"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
