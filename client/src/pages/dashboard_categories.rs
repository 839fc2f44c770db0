//! Admin-only category list with a create form.

use leptos::prelude::*;

use crate::components::dashboard_shell::RoleGate;
use crate::components::skeletons::TableSkeleton;
use crate::net::api;
use crate::state::query::QueryKey;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::can_administer;
use crate::util::forms::validate_category;
use crate::util::query::{Mutation, notify, run_mutation, use_query};

#[component]
pub fn DashboardCategoriesPage() -> impl IntoView {
    view! {
        <RoleGate allow=can_administer>
            <ManageCategories/>
        </RoleGate>
    }
}

#[component]
fn ManageCategories() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let categories = use_query(QueryKey::categories, |_| api::list_categories());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = match validate_category(&name.get_untracked(), &description.get_untracked()) {
            Ok(draft) => draft,
            Err(e) => {
                notify(toasts, ToastKind::Error, e.to_string());
                return;
            }
        };
        saving.set(true);
        let mutation = Mutation::new("Failed to create category")
            .invalidates(QueryKey::categories())
            .success("Category created");
        run_mutation(
            mutation,
            async move {
                let result = api::create_category(&draft).await;
                saving.set(false);
                result
            },
            move |_| {
                name.set(String::new());
                description.set(String::new());
            },
        );
    };

    view! {
        <div class="manage">
            <header class="page-header">
                <h1 class="page-header__title">"Manage Categories"</h1>
            </header>
            <div class="card">
                <h2 class="card__title">"Create Category"</h2>
                <form class="inline-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Name"</span>
                        <input
                            class="input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Description"</span>
                        <input
                            class="input"
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Creating..." } else { "Create" }}
                    </button>
                </form>
            </div>
            <div class="card">
                <Suspense fallback=move || view! { <TableSkeleton cols=3/> }>
                    {move || {
                        categories
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Name"</th>
                                                    <th>"Description"</th>
                                                    <th>"Slug"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {list
                                                    .into_iter()
                                                    .map(|c| {
                                                        view! {
                                                            <tr>
                                                                <td>{c.name}</td>
                                                                <td>{c.description.unwrap_or_default()}</td>
                                                                <td>{c.slug}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    view! { <p class="manage__error">{e.user_message("Failed to load categories")}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
