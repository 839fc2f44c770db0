//! Dashboard overview: welcome banner, role card, admin analytics, and quick
//! actions.

use leptos::prelude::*;

use crate::components::skeletons::{DashboardOverviewSkeleton, StatCardSkeleton};
use crate::net::api;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::query::QueryKey;
use crate::util::auth::{can_administer, can_manage_content};
use crate::util::query::use_query;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = move || auth.get().role();

    view! {
        <Show when=move || auth.get().is_signed_in() fallback=|| view! { <DashboardOverviewSkeleton/> }>
            <div class="dashboard-overview">
                <div class="banner">
                    <p class="banner__eyebrow">"Dashboard"</p>
                    <h1 class="banner__title">
                        "Welcome back, "
                        <span class="banner__name">{move || auth.get().user.map(|u| u.name).unwrap_or_default()}</span>
                        "!"
                    </h1>
                    <p class="banner__lede">"Here's what's happening with your blog today."</p>
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Your Role"
                        value=Signal::derive(move || role().map_or("", Role::label).to_owned())
                        modifier=Signal::derive(move || role_modifier(role()))
                    />
                    <Show when=move || can_administer(role())>
                        <AdminAnalytics/>
                    </Show>
                </div>

                <section class="quick-actions">
                    <h2 class="quick-actions__title">"Quick Actions"</h2>
                    <div class="quick-actions__row">
                        <a class="btn btn--primary" href="/">
                            "View Blog"
                        </a>
                        <Show when=move || can_manage_content(role())>
                            <a class="btn btn--outline" href="/dashboard/create-post">
                                "Create New Post"
                            </a>
                        </Show>
                    </div>
                </section>
            </div>
        </Show>
    }
}

fn role_modifier(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "stat-card--admin",
        Some(Role::Editor) => "stat-card--editor",
        _ => "stat-card--user",
    }
}

#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] modifier: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class=move || format!("stat-card {}", modifier.get())>
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{move || value.get()}</p>
        </div>
    }
}

#[component]
fn AdminAnalytics() -> impl IntoView {
    let analytics = use_query(QueryKey::analytics, |_| api::analytics());

    view! {
        <Suspense fallback=move || view! { <StatCardSkeleton/><StatCardSkeleton/><StatCardSkeleton/> }>
            {move || {
                analytics
                    .get()
                    .and_then(Result::ok)
                    .map(|data| {
                        view! {
                            <StatCard label="Total Posts" value=data.total_posts.to_string() modifier="stat-card--posts"/>
                            <StatCard label="Total Users" value=data.total_users.to_string() modifier="stat-card--users"/>
                            <StatCard label="Total Likes" value=data.total_likes.to_string() modifier="stat-card--likes"/>
                        }
                    })
            }}
        </Suspense>
    }
}
