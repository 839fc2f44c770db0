//! Authenticated dashboard frame: sidebar plus the nested route outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/dashboard/*` route renders inside this shell. It owns the
//! unauthenticated redirect, so child pages only deal with role gating.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::auth::{AuthState, LocalStorageStore};
use crate::util::auth::{install_unauth_redirect, nav_active, nav_items};
use crate::util::format::initial;

#[component]
pub fn DashboardShell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_signed_in()
            fallback=move || {
                view! {
                    <div class="dashboard-loading">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard">
                <Sidebar/>
                <main class="dashboard__main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let role = move || auth.get().role();

    let on_logout = move |_| {
        auth.update(|a| a.logout(&LocalStorageStore));
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__head">
                <a class="sidebar__brand" href="/">
                    "Inkwell"
                </a>
                <div class="sidebar__user">
                    <span class="avatar avatar--large">{move || initial(&name())}</span>
                    <div>
                        <p class="sidebar__name">{name}</p>
                        <p class="sidebar__role">{move || role().map_or("", Role::label)}</p>
                    </div>
                </div>
            </div>
            <nav class="sidebar__nav">
                {move || {
                    let path = location.pathname.get();
                    let mut current_section = None;
                    let mut rows = Vec::new();
                    for item in nav_items(role()) {
                        if current_section != Some(item.section) {
                            current_section = Some(item.section);
                            if let Some(heading) = item.section.heading() {
                                rows.push(view! { <div class="sidebar__heading">{heading}</div> }.into_any());
                            }
                        }
                        let active = nav_active(item.href, &path);
                        rows.push(
                            view! {
                                <a class="sidebar__link" class:sidebar__link--active=active href=item.href>
                                    {item.label}
                                </a>
                            }
                                .into_any(),
                        );
                    }
                    rows
                }}
            </nav>
            <div class="sidebar__foot">
                <button class="sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

/// Renders "Access Denied" unless the signed-in role passes `allow`.
#[component]
pub fn RoleGate(allow: fn(Option<Role>) -> bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show
            when=move || allow(auth.get().role())
            fallback=|| view! { <p class="access-denied">"Access Denied"</p> }
        >
            {children()}
        </Show>
    }
}
