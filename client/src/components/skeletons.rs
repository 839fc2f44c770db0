//! Placeholder blocks shown while queries are loading.

use leptos::prelude::*;

#[component]
pub fn PostCardSkeleton() -> impl IntoView {
    view! {
        <div class="post-card post-card--skeleton" aria-hidden="true">
            <div class="skeleton skeleton--image"></div>
            <div class="post-card__body">
                <div class="skeleton skeleton--line skeleton--short"></div>
                <div class="skeleton skeleton--line skeleton--title"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line skeleton--wide"></div>
            </div>
        </div>
    }
}

#[component]
pub fn PostGridSkeleton(#[prop(default = 6)] count: usize) -> impl IntoView {
    view! {
        <div class="post-grid">
            {(0..count).map(|_| view! { <PostCardSkeleton/> }).collect::<Vec<_>>()}
        </div>
    }
}

/// Stand-in for a dashboard table body.
#[component]
pub fn TableSkeleton(#[prop(default = 6)] rows: usize, #[prop(default = 5)] cols: usize) -> impl IntoView {
    view! {
        <table class="data-table data-table--skeleton" aria-hidden="true">
            <tbody>
                {(0..rows)
                    .map(|_| {
                        view! {
                            <tr>
                                {(0..cols)
                                    .map(|_| view! { <td><div class="skeleton skeleton--line"></div></td> })
                                    .collect::<Vec<_>>()}
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
pub fn StatCardSkeleton() -> impl IntoView {
    view! {
        <div class="stat-card stat-card--skeleton" aria-hidden="true">
            <div class="skeleton skeleton--line skeleton--short"></div>
            <div class="skeleton skeleton--line skeleton--title"></div>
        </div>
    }
}

#[component]
pub fn DashboardOverviewSkeleton() -> impl IntoView {
    view! {
        <div class="dashboard-overview">
            <div class="skeleton skeleton--banner"></div>
            <div class="stat-grid">
                {(0..4).map(|_| view! { <StatCardSkeleton/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
