use leptos::prelude::*;

use crate::catalog;
use crate::models::Page;
use crate::state::use_shop;

/// Detail view for the selected post. An id that matches nothing renders
/// empty, same as a detail page with no selection at all.
#[component]
pub fn BlogDetailPage(blog_id: u32) -> impl IntoView {
    let state = use_shop();

    catalog::blog_post_by_id(blog_id).map(|post| {
        let related: Vec<_> = catalog::blog_posts()
            .into_iter()
            .filter(|other| other.id != blog_id)
            .take(2)
            .collect();

        view! {
            <article class="blog-detail">
                <button class="back-link" on:click=move |_| state.navigate(Page::Blog)>
                    "All posts"
                </button>
                <p class="post-date">{post.date.clone()} " · " {post.author.clone()}</p>
                <h1>{post.title.clone()}</h1>
                <img src=post.image.clone() alt=post.title.clone() />
                <p class="post-body">{post.content.clone()}</p>
                <h2>"More from the blog"</h2>
                <div class="related-posts">
                    {related
                        .into_iter()
                        .map(|other| {
                            let other_id = other.id;
                            view! {
                                <button
                                    class="related-link"
                                    on:click=move |_| state.view_blog(other_id)
                                >
                                    {other.title.clone()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </article>
        }
    })
}
