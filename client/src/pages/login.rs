//! Email + password sign-in.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::forms::validate_login;
use crate::util::query::notify;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_login(&email.get(), &password.get()) {
            Ok(body) => body,
            Err(e) => {
                notify(toasts, ToastKind::Error, e.to_string());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&body).await {
                    Ok(resp) => {
                        auth.update(|a| a.login(&crate::state::auth::LocalStorageStore, resp.token, resp.user));
                        notify(toasts, ToastKind::Success, "Logged in successfully");
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.user_message("Login failed")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, &navigate, auth);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Login to Inkwell"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="input"
                            type="email"
                            placeholder="m@example.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/auth/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
