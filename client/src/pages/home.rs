//! Public landing page: hero and the paginated post feed.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::site_header::SiteHeader;
use crate::components::skeletons::PostGridSkeleton;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::query::QueryKey;
use crate::util::query::use_query;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let page = RwSignal::new(1_u32);

    let feed = use_query(move || QueryKey::posts_feed(page.get()), move |_| api::list_posts(page.get_untracked()));

    view! {
        <div class="home">
            <SiteHeader/>
            <main>
                <section class="hero">
                    <h2 class="hero__title">"Discover Stories that " <span class="hero__accent">"Matter"</span></h2>
                    <p class="hero__lede">
                        "A modern platform for thinkers, creators, and readers. Share your ideas with the world and connect with a community of like-minded individuals."
                    </p>
                    <Show when=move || !auth.get().is_signed_in()>
                        <a class="btn btn--primary btn--large" href="/auth/register">
                            "Start Writing Now"
                        </a>
                    </Show>
                </section>

                <section class="feed">
                    <h3 class="feed__title">"Latest Articles"</h3>
                    <Suspense fallback=move || view! { <PostGridSkeleton/> }>
                        {move || {
                            feed.get()
                                .map(|result| match result {
                                    Ok(data) if data.posts.is_empty() => {
                                        view! {
                                            <div class="feed__empty">
                                                <p>"No posts found yet."</p>
                                                <p class="feed__hint">"Check back later or become an author!"</p>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    Ok(data) => {
                                        let has_prev = data.has_prev();
                                        let has_next = data.has_next();
                                        let label = format!("Page {} of {}", data.page, data.pages.max(1));
                                        view! {
                                            <div class="post-grid">
                                                {data
                                                    .posts
                                                    .into_iter()
                                                    .map(|post| view! { <PostCard post=post/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                            <nav class="pager">
                                                <button
                                                    class="btn btn--outline"
                                                    disabled=!has_prev
                                                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                                                >
                                                    "← Newer"
                                                </button>
                                                <span class="pager__label">{label}</span>
                                                <button
                                                    class="btn btn--outline"
                                                    disabled=!has_next
                                                    on:click=move |_| page.update(|p| *p += 1)
                                                >
                                                    "Older →"
                                                </button>
                                            </nav>
                                        }
                                            .into_any()
                                    }
                                    Err(_) => view! { <p class="feed__error">"Error loading posts"</p> }.into_any(),
                                })
                        }}
                    </Suspense>
                </section>
            </main>
            <footer class="site-footer">
                <p>"© Inkwell. All rights reserved."</p>
            </footer>
        </div>
    }
}
