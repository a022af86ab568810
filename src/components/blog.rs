use leptos::prelude::*;

use crate::catalog;
use crate::state::use_shop;

/// Blog index: every post as a teaser card.
#[component]
pub fn BlogPage() -> impl IntoView {
    let state = use_shop();

    view! {
        <section class="blog-page">
            <h1>"Pet care notes"</h1>
            <div class="post-grid">
                {catalog::blog_posts()
                    .into_iter()
                    .map(|post| {
                        let post_id = post.id;
                        view! {
                            <article class="post-card">
                                <img src=post.image.clone() alt=post.title.clone() />
                                <p class="post-date">{post.date.clone()} " · " {post.author.clone()}</p>
                                <h2>{post.title.clone()}</h2>
                                <p class="post-excerpt">{post.excerpt.clone()}</p>
                                <button class="read-more" on:click=move |_| state.view_blog(post_id)>
                                    "Read more"
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
