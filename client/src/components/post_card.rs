//! Feed card for a single post.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::util::config::image_url;
use crate::util::format::{excerpt, format_date, initial};

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/posts/{}", post.id);
    let image = image_url(post.image.as_deref());
    let category = post.category.as_ref().map_or("Uncategorized", |c| c.name_or("Uncategorized")).to_owned();
    let author = post.author.as_ref().map_or("Unknown", |a| a.name_or("Unknown")).to_owned();
    let author_initial = initial(&author);
    let date = format_date(post.created_at.as_deref());
    let summary = excerpt(&post.content);
    let title = post.title;
    let title_initial = initial(&title);

    view! {
        <article class="post-card">
            <div class="post-card__media">
                {match image {
                    Some(src) => view! { <img class="post-card__image" src=src alt=title.clone()/> }.into_any(),
                    None => view! { <div class="post-card__placeholder" aria-hidden="true">{title_initial}</div> }.into_any(),
                }}
            </div>
            <div class="post-card__body">
                <span class="badge post-card__category">{category}</span>
                <h3 class="post-card__title">
                    <a href=href.clone()>{title}</a>
                </h3>
                <p class="post-card__excerpt">{summary}</p>
            </div>
            <footer class="post-card__footer">
                <div class="post-card__author">
                    <span class="avatar avatar--small">{author_initial}</span>
                    <span class="post-card__author-meta">
                        <span class="post-card__author-name">{author}</span>
                        <span class="post-card__date">{date}</span>
                    </span>
                </div>
                <a class="post-card__read" href=href>
                    "Read Story →"
                </a>
            </footer>
        </article>
    }
}
