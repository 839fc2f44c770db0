//! Create and edit post forms.
//!
//! Both routes share one editor; edit mode loads the post first and seeds the
//! draft from it once.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::dashboard_shell::RoleGate;
use crate::net::api;
use crate::net::types::{Category, Post, PostStatus};
use crate::state::query::QueryKey;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::can_manage_content;
use crate::util::config::image_url;
use crate::util::post_form::{EditorMode, PostDraft};
use crate::util::query::{Mutation, notify, run_mutation, use_query};
use crate::util::upload::{IMAGE_ACCEPT, ImageUpload, release_preview};
#[cfg(feature = "hydrate")]
use crate::util::upload::resolve_pick;

const MANAGE_POSTS_PATH: &str = "/dashboard/posts";

#[component]
pub fn CreatePostPage() -> impl IntoView {
    view! {
        <RoleGate allow=can_manage_content>
            <div class="editor-page">
                <h1 class="editor-page__title">"Create New Post"</h1>
                <PostEditor mode=EditorMode::Create/>
            </div>
        </RoleGate>
    }
}

#[component]
pub fn EditPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = use_query(
        move || QueryKey::post(&params.read().get("id").unwrap_or_default()),
        move |_| {
            let id = params.read_untracked().get("id").unwrap_or_default();
            async move { api::get_post(&id).await }
        },
    );

    view! {
        <RoleGate allow=can_manage_content>
            <div class="editor-page">
                <h1 class="editor-page__title">"Edit Post"</h1>
                <Suspense fallback=move || view! { <p>"Loading post..."</p> }>
                    {move || {
                        post.get()
                            .map(|result| match result {
                                Ok(post) => view! { <PostEditor mode=EditorMode::Edit existing=post/> }.into_any(),
                                Err(e) => view! { <p class="editor-page__error">{e.user_message("Post not found")}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </RoleGate>
    }
}

#[component]
fn PostEditor(mode: EditorMode, #[prop(optional)] existing: Option<Post>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let post_id = existing.as_ref().map(|p| p.id.clone()).unwrap_or_default();
    let current_image = image_url(existing.as_ref().and_then(|p| p.image.as_deref()));
    let draft = RwSignal::new(existing.as_ref().map(PostDraft::from_post).unwrap_or_default());
    let image = RwSignal::new_local(None::<ImageUpload>);
    let existing_image = current_image.clone();
    let preview = RwSignal::new(current_image);
    let saving = RwSignal::new(false);

    let categories = use_query(QueryKey::categories, |_| api::list_categories());

    on_cleanup(move || {
        if let Some(Some(url)) = preview.try_get_untracked() {
            release_preview(&url);
        }
    });

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let outcome = resolve_pick(crate::util::upload::image_from_event(&ev), existing_image.clone());
            swap_preview(preview, outcome.preview);
            image.set(outcome.image);
            if let Some(message) = outcome.error {
                notify(toasts, ToastKind::Error, message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &existing_image);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if let Err(e) = current.validate() {
            notify(toasts, ToastKind::Error, e.to_string());
            return;
        }
        saving.set(true);
        let form = current.to_form(mode, image.get_untracked());
        let (failure, fallback_success) = match mode {
            EditorMode::Create => ("Failed to create post", "Post created successfully!"),
            EditorMode::Edit => ("Failed to update post", "Post updated successfully!"),
        };
        let id = post_id.clone();
        let navigate = navigate.clone();
        let mutation = Mutation::new(failure).invalidates(QueryKey::posts());
        run_mutation(
            mutation,
            async move {
                let result = match mode {
                    EditorMode::Create => api::create_post(form).await,
                    EditorMode::Edit => api::update_post(&id, form).await,
                };
                saving.set(false);
                result
            },
            move |ack| {
                notify(toasts, ToastKind::Success, ack.message.unwrap_or_else(|| fallback_success.to_owned()));
                #[cfg(feature = "hydrate")]
                {
                    navigate(MANAGE_POSTS_PATH, NavigateOptions::default());
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (navigate, MANAGE_POSTS_PATH);
                }
            },
        );
    };

    let on_cancel = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.back();
            }
        }
    };

    view! {
        <form class="editor" on:submit=on_submit>
            <label class="field">
                <span class="field__label">"Title"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="Enter post title"
                    required
                    prop:value=move || draft.get().title
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </label>

            <label class="field">
                <span class="field__label">"Image"</span>
                <input class="input" type="file" accept=IMAGE_ACCEPT on:change=on_image_change/>
            </label>
            {move || {
                preview
                    .get()
                    .map(|src| {
                        view! {
                            <div class="editor__preview">
                                <img src=src alt="Preview"/>
                            </div>
                        }
                    })
            }}

            <label class="field">
                <span class="field__label">"Category"</span>
                <select
                    class="input"
                    prop:value=move || draft.get().category
                    on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    {move || {
                        categories
                            .get()
                            .and_then(Result::ok)
                            .map(|list| category_options(list, draft))
                    }}
                </select>
            </label>

            <label class="field">
                <span class="field__label">"Content"</span>
                <textarea
                    class="textarea textarea--tall"
                    placeholder="Write your post content here..."
                    required
                    prop:value=move || draft.get().content
                    on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                ></textarea>
            </label>

            <label class="field">
                <span class="field__label">"Status"</span>
                <select
                    class="input"
                    prop:value=move || draft.get().status.as_str()
                    on:change=move |ev| draft.update(|d| d.status = PostStatus::from_form_value(&event_target_value(&ev)))
                >
                    <option value="draft">"Draft"</option>
                    <option value="published">"Published"</option>
                </select>
            </label>

            <div class="editor__actions">
                <button class="btn btn--outline" type="button" on:click=on_cancel>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || match (mode, saving.get()) {
                        (_, true) => "Saving...",
                        (EditorMode::Create, false) => "Create Post",
                        (EditorMode::Edit, false) => "Update Post",
                    }}
                </button>
            </div>
        </form>
    }
}

/// Show `next`, releasing the object URL it replaces.
#[cfg(feature = "hydrate")]
fn swap_preview(preview: RwSignal<Option<String>>, next: Option<String>) {
    if let Some(old) = preview.get_untracked() {
        if next.as_deref() != Some(old.as_str()) {
            release_preview(&old);
        }
    }
    preview.set(next);
}

fn category_options(list: Vec<Category>, draft: RwSignal<PostDraft>) -> impl IntoView {
    list.into_iter()
        .map(|c| {
            let id = c.id.clone();
            let selected = move || draft.get().category == id;
            view! {
                <option value=c.id selected=selected>
                    {c.name}
                </option>
            }
        })
        .collect::<Vec<_>>()
}
