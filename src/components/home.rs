use leptos::prelude::*;

use crate::catalog;
use crate::components::ProductCard;
use crate::models::Page;
use crate::state::use_shop;

/// Landing page: hero banner, store promises, a featured slice of the
/// catalog, and the latest post.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_shop();
    let featured: Vec<_> = catalog::products()
        .into_iter()
        .filter(|p| p.in_stock())
        .take(4)
        .collect();
    let latest_post = catalog::blog_posts().into_iter().next();

    view! {
        <section class="hero">
            <h1>"Everything your pet loves, in one place"</h1>
            <p>"From daily kibble to rainy-day toys, for the cats and dogs who run your home."</p>
            <button class="cta" on:click=move |_| state.navigate(Page::Shop)>
                "Shop now"
            </button>
        </section>
        <section class="store-promises">
            <div class="promise-card">
                <p class="promise-title">"Same-day delivery"</p>
                <p>"Order before noon, feed them tonight."</p>
            </div>
            <div class="promise-card">
                <p class="promise-title">"Vet-checked range"</p>
                <p>"Every food and medicine is reviewed by our vets."</p>
            </div>
            <div class="promise-card">
                <p class="promise-title">"Easy returns"</p>
                <p>"Unopened items come back within 30 days."</p>
            </div>
        </section>
        <section class="featured">
            <h2>"Popular right now"</h2>
            <div class="product-grid">
                {featured
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </div>
        </section>
        {latest_post.map(|post| {
            let post_id = post.id;
            view! {
                <section class="home-blog-teaser">
                    <h2>"From the blog"</h2>
                    <p class="post-date">{post.date.clone()}</p>
                    <h3>{post.title.clone()}</h3>
                    <p>{post.excerpt.clone()}</p>
                    <button class="read-more" on:click=move |_| state.view_blog(post_id)>
                        "Read more"
                    </button>
                </section>
            }
        })}
    }
}
