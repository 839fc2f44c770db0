//! Manage Posts table with edit links and delete.

use leptos::prelude::*;

use crate::components::dashboard_shell::RoleGate;
use crate::components::skeletons::TableSkeleton;
use crate::net::api;
use crate::net::types::{PostStatus, PostsPage};
use crate::state::auth::AuthState;
use crate::state::query::QueryKey;
use crate::util::auth::{can_manage_content, can_modify_post};
use crate::util::format::{format_date, post_count_label};
use crate::util::query::{Mutation, run_mutation, use_query};

#[component]
pub fn DashboardPostsPage() -> impl IntoView {
    view! {
        <RoleGate allow=can_manage_content>
            <ManagePosts/>
        </RoleGate>
    }
}

#[component]
fn ManagePosts() -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let posts = use_query(move || QueryKey::posts_manage(page.get()), move |_| api::list_posts(page.get_untracked()));

    let on_delete = Callback::new(move |id: String| {
        if !confirm_delete() {
            return;
        }
        let mutation = Mutation::new("Failed to delete post")
            .invalidates(QueryKey::posts())
            .success("Post deleted successfully");
        run_mutation(mutation, async move { api::delete_post(&id).await }, |_| {});
    });

    view! {
        <div class="manage">
            <header class="page-header">
                <div>
                    <h1 class="page-header__title">"Manage Posts"</h1>
                    <p class="page-header__sub">
                        {move || {
                            posts
                                .get()
                                .and_then(Result::ok)
                                .map(|data| post_count_label(data.posts.len()))
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
                <a class="btn btn--primary" href="/dashboard/create-post">
                    "New Post"
                </a>
            </header>
            <div class="card">
                <Suspense fallback=move || view! { <TableSkeleton cols=6/> }>
                    {move || {
                        posts
                            .get()
                            .map(|result| match result {
                                Ok(data) => view! { <PostsTable data=data page=page on_delete=on_delete/> }.into_any(),
                                Err(e) => {
                                    view! { <p class="manage__error">{e.user_message("Failed to load posts")}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}

#[component]
fn PostsTable(data: PostsPage, page: RwSignal<u32>, on_delete: Callback<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let has_prev = data.has_prev();
    let has_next = data.has_next();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Author"</th>
                    <th>"Category"</th>
                    <th>"Status"</th>
                    <th>"Created At"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {data
                    .posts
                    .into_iter()
                    .map(|post| {
                        let author = post.author.as_ref().and_then(|a| a.name.clone()).unwrap_or_default();
                        let category = post
                            .category
                            .as_ref()
                            .map_or("Uncategorized", |c| c.name_or("Uncategorized"))
                            .to_owned();
                        let published = post.status == PostStatus::Published;
                        let status = post.status.as_str();
                        let date = format_date(post.created_at.as_deref());
                        let edit_href = format!("/dashboard/posts/edit/{}", post.id);
                        let id = post.id.clone();
                        let title = post.title.clone();
                        let allowed = move || can_modify_post(auth.get().user.as_ref(), &post);
                        view! {
                            <tr>
                                <td class="data-table__title">{title}</td>
                                <td>{author}</td>
                                <td>
                                    <span class="badge">{category}</span>
                                </td>
                                <td>
                                    <span class="status" class:status--published=published>
                                        {status}
                                    </span>
                                </td>
                                <td>{date}</td>
                                <td>
                                    <Show when=allowed>
                                        <div class="row-actions">
                                            <a class="btn btn--icon" href=edit_href.clone() title="Edit post">
                                                "✎"
                                            </a>
                                            <button
                                                class="btn btn--icon btn--danger"
                                                title="Delete post"
                                                on:click={
                                                    let id = id.clone();
                                                    move |_| on_delete.run(id.clone())
                                                }
                                            >
                                                "🗑"
                                            </button>
                                        </div>
                                    </Show>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
        <nav class="pager">
            <button
                class="btn btn--outline"
                disabled=!has_prev
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <button class="btn btn--outline" disabled=!has_next on:click=move |_| page.update(|p| *p += 1)>
                "Next"
            </button>
        </nav>
    }
}

fn confirm_delete() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to delete this post?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
