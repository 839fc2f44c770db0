//! Single post view with likes and comments.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::components::comments_section::CommentsSection;
use crate::components::like_button::LikeButton;
use crate::net::api;
use crate::net::types::Post;
use crate::state::query::QueryKey;
use crate::util::config::image_url;
use crate::util::format::{excerpt, format_date, paragraphs};
use crate::util::query::use_query;

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || params.read().get("id").unwrap_or_default();

    let post = use_query(
        move || QueryKey::post(&post_id()),
        move |_| {
            let id = params.read_untracked().get("id").unwrap_or_default();
            async move { api::get_post(&id).await }
        },
    );

    view! {
        <div class="post-page">
            <a class="post-page__back" href="/">
                "← Back to Home"
            </a>
            <Suspense fallback=move || view! { <p class="post-page__loading">"Loading post..."</p> }>
                {move || {
                    post.get()
                        .map(|result| match result {
                            Ok(post) => render_post(post).into_any(),
                            Err(_) => {
                                view! {
                                    <Title text="Post Not Found"/>
                                    <div class="post-page__missing">
                                        <h1>"Post not found"</h1>
                                        <p>"It may have been removed or never existed."</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn render_post(post: Post) -> impl IntoView {
    let image = image_url(post.image.as_deref());
    let author = post.author.as_ref().map_or("Unknown", |a| a.name_or("Unknown")).to_owned();
    let date = format_date(post.created_at.as_deref());
    let description = excerpt(&post.content);
    let tags = post.tags.iter().map(|t| t.name_or(&t.id).to_owned()).collect::<Vec<_>>();
    let body = paragraphs(&post.content);
    let title = post.title;
    let id = post.id;

    view! {
        <Title text=title.clone()/>
        <Meta name="description" content=description/>
        <article class="post">
            <h1 class="post__title">{title.clone()}</h1>
            <div class="post__meta">
                <span>"By " {author}</span>
                <span>{date}</span>
            </div>
            {image
                .map(|src| {
                    view! {
                        <div class="post__image">
                            <img src=src alt=title/>
                        </div>
                    }
                })}
            <div class="post__body">
                {body.into_iter().map(|para| view! { <p>{para}</p> }).collect::<Vec<_>>()}
            </div>
            <footer class="post__footer">
                <div class="post__tags">
                    {tags
                        .into_iter()
                        .map(|name| view! { <span class="tag-chip">{format!("#{name}")}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <LikeButton post_id=id.clone()/>
            </footer>
        </article>
        <CommentsSection post_id=id/>
    }
}
