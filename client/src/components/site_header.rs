//! Public site header with auth-aware actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, LocalStorageStore};
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let signed_out = RwSignal::new(false);

    Effect::new(move || {
        if signed_out.get() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        auth.update(|a| a.logout(&LocalStorageStore));
        signed_out.set(true);
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Inkwell"
            </a>
            <nav class="site-header__actions">
                <Show
                    when=move || auth.get().is_signed_in()
                    fallback=|| {
                        view! {
                            <a class="btn btn--ghost" href=LOGIN_PATH>
                                "Login"
                            </a>
                            <a class="btn btn--primary" href="/auth/register">
                                "Get Started"
                            </a>
                        }
                    }
                >
                    <span class="site-header__welcome">
                        "Welcome, " {move || auth.get().user.map(|u| u.name).unwrap_or_default()}
                    </span>
                    <a class="btn btn--outline" href="/dashboard">
                        "Dashboard"
                    </a>
                    <button class="btn btn--ghost btn--danger" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
