//! Like toggle with live count for a post.
//!
//! The count comes from the `likes` query; membership is only known after the
//! first toggle unless the server reports it in the summary.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::LikeToggleResponse;
use crate::state::auth::AuthState;
use crate::state::likes::LikeState;
use crate::state::query::QueryKey;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::query::{Mutation, notify, run_mutation, use_query};

#[component]
pub fn LikeButton(post_id: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(LikeState::default());
    let pending = RwSignal::new(false);

    let summary = use_query(
        {
            let id = post_id.clone();
            move || QueryKey::likes(&id)
        },
        {
            let id = post_id.clone();
            move |_| {
                let id = id.clone();
                async move { api::like_summary(&id).await }
            }
        },
    );
    Effect::new(move || {
        if let Some(Ok(summary)) = summary.get() {
            state.update(|s| *s = s.with_summary(&summary));
        }
    });

    let on_click = move |_| {
        if !auth.get_untracked().is_signed_in() {
            notify(toasts, ToastKind::Error, "Please login to like this post");
            return;
        }
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let id = post_id.clone();
        let mutation = Mutation::new("Failed to like post").invalidates(QueryKey::likes(&id));
        run_mutation(
            mutation,
            async move {
                let result = api::toggle_like(&id).await;
                pending.set(false);
                result
            },
            move |resp: LikeToggleResponse| {
                state.update(|s| *s = s.with_toggle(&resp));
                notify(toasts, ToastKind::Success, resp.message);
            },
        );
    };

    view! {
        <button
            class="btn btn--outline like-button"
            class:like-button--liked=move || state.get().liked
            disabled=move || pending.get()
            on:click=on_click
        >
            <span class="like-button__icon" aria-hidden="true">
                {move || if state.get().liked { "♥" } else { "♡" }}
            </span>
            <span>{move || state.get().label()}</span>
        </button>
    }
}
