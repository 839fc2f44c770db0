//! Comment list and composer under a post.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Comment;
use crate::state::auth::AuthState;
use crate::state::query::QueryKey;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{LOGIN_PATH, can_delete_comment};
use crate::util::format::{format_date, initial};
use crate::util::forms::validate_comment;
use crate::util::query::{Mutation, notify, run_mutation, use_query};

#[component]
pub fn CommentsSection(post_id: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let content = RwSignal::new(String::new());
    let posting = RwSignal::new(false);
    let post_id = StoredValue::new(post_id);

    let comments = use_query(
        move || QueryKey::comments(&post_id.get_value()),
        move |_| {
            let id = post_id.get_value();
            async move { api::list_comments(&id).await }
        },
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if posting.get_untracked() {
            return;
        }
        let draft = match validate_comment(&post_id.get_value(), &content.get_untracked()) {
            Ok(draft) => draft,
            Err(e) => {
                notify(toasts, ToastKind::Error, e.to_string());
                return;
            }
        };
        posting.set(true);
        let mutation = Mutation::new("Failed to add comment")
            .invalidates(QueryKey::comments(&draft.post_id))
            .success("Comment added");
        run_mutation(
            mutation,
            async move {
                let result = api::add_comment(&draft).await;
                posting.set(false);
                result
            },
            move |_| content.set(String::new()),
        );
    };

    let on_delete = Callback::new(move |comment_id: String| {
        let mutation = Mutation::new("Failed to delete comment")
            .invalidates(QueryKey::comments(&post_id.get_value()))
            .success("Comment deleted");
        run_mutation(mutation, async move { api::delete_comment(&comment_id).await }, |_| {});
    });

    view! {
        <section class="comments">
            <Suspense fallback=move || view! { <p class="comments__loading">"Loading comments..."</p> }>
                {move || {
                    comments
                        .get()
                        .map(|result| {
                            let list = result.unwrap_or_default();
                            let count = list.len();
                            view! {
                                <h3 class="comments__title">{format!("Comments ({count})")}</h3>
                                <Show
                                    when=move || auth.get().is_signed_in()
                                    fallback=|| {
                                        view! {
                                            <p class="comments__signin">
                                                "Please " <a href=LOGIN_PATH>"login"</a> " to comment."
                                            </p>
                                        }
                                    }
                                >
                                    <form class="comments__form" on:submit=on_submit>
                                        <textarea
                                            class="textarea"
                                            placeholder="Write a comment..."
                                            prop:value=move || content.get()
                                            on:input=move |ev| content.set(event_target_value(&ev))
                                        ></textarea>
                                        <button class="btn btn--primary" type="submit" disabled=move || posting.get()>
                                            {move || if posting.get() { "Posting..." } else { "Post Comment" }}
                                        </button>
                                    </form>
                                </Show>
                                <CommentList comments=list on_delete=on_delete/>
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn CommentList(comments: Vec<Comment>, on_delete: Callback<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    if comments.is_empty() {
        return view! {
            <p class="comments__empty">"No comments yet. Be the first to share your thoughts!"</p>
        }
        .into_any();
    }

    view! {
        <ul class="comments__list">
            {comments
                .into_iter()
                .map(|comment| {
                    let author = comment.user.name_or("Anonymous").to_owned();
                    let author_initial = initial(&author);
                    let date = format_date(comment.created_at.as_deref());
                    let id = comment.id.clone();
                    let body = comment.content.clone();
                    let deletable = move || can_delete_comment(auth.get().user.as_ref(), &comment);
                    view! {
                        <li class="comment">
                            <span class="avatar">{author_initial}</span>
                            <div class="comment__main">
                                <div class="comment__header">
                                    <span class="comment__author">{author}</span>
                                    <span class="comment__date">{date}</span>
                                    <Show when=deletable>
                                        <button
                                            class="btn btn--icon comment__delete"
                                            title="Delete comment"
                                            aria-label="Delete comment"
                                            on:click={
                                                let id = id.clone();
                                                move |_| on_delete.run(id.clone())
                                            }
                                        >
                                            "🗑"
                                        </button>
                                    </Show>
                                </div>
                                <p class="comment__content">{body}</p>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
