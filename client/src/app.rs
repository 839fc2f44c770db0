//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::dashboard_shell::DashboardShell;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage,
    dashboard_categories::DashboardCategoriesPage,
    dashboard_posts::DashboardPostsPage,
    dashboard_tags::DashboardTagsPage,
    dashboard_users::DashboardUsersPage,
    home::HomePage,
    login::LoginPage,
    post::PostPage,
    post_editor::{CreatePostPage, EditPostPage},
    register::RegisterPage,
};
use crate::state::auth::{AuthState, LocalStorageStore};
use crate::state::toast::ToastState;
use crate::util::query::QueryClient;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, query and toast contexts and sets up client-side
/// routing. Auth starts in the loading state and is restored from
/// `localStorage` once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);
    provide_context(QueryClient::new());

    // Effects only run in the browser, so SSR always renders the loading state.
    Effect::new(move || {
        auth.set(AuthState::restore(&LocalStorageStore));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/inkwell.css"/>
        <Title text="Inkwell"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("posts"), ParamSegment("id")) view=PostPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("posts") view=DashboardPostsPage/>
                    <Route path=StaticSegment("create-post") view=CreatePostPage/>
                    <Route
                        path=(StaticSegment("posts"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditPostPage
                    />
                    <Route path=StaticSegment("users") view=DashboardUsersPage/>
                    <Route path=StaticSegment("categories") view=DashboardCategoriesPage/>
                    <Route path=StaticSegment("tags") view=DashboardTagsPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
