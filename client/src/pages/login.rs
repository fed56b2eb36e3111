//! Login page backed by the mock auth API.
//!
//! Signed-in visitors never see the form: the guest guard forwards them to
//! their next onboarding step, which is also how a successful login redirects.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::components::toast_host::notify;
use crate::net::mock_api::{self, AuthError};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};

/// Welcome line shown after a successful login.
pub fn welcome_message(name: &str) -> String {
    let first = name.split_whitespace().next().unwrap_or(name);
    if first.is_empty() { "Welcome back!".to_owned() } else { format!("Welcome back, {first}!") }
}

/// Toast raised for a rejected login; the same text is shown inline.
pub fn rejection_toast(e: &AuthError) -> (ToastKind, String) {
    (ToastKind::Error, e.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Guarded route=AppRoute::Login>
            <LoginForm/>
        </Guarded>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let reject = move |e: AuthError| {
        let (kind, message) = rejection_toast(&e);
        notify(toasts, kind, message.clone());
        error.set(Some(message));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(e) = mock_api::check_login(&email_value, &password_value) {
            reject(e);
            return;
        }
        busy.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            match mock_api::login(&email_value, &password_value).await {
                Ok(user) => {
                    notify(toasts, ToastKind::Success, welcome_message(&user.name));
                    auth.update(|a| a.sign_in(user));
                }
                Err(e @ (AuthError::MissingFields | AuthError::Invalid(_))) => reject(e),
                Err(e) => {
                    leptos::logging::warn!("unexpected login failure: {e}");
                    reject(e);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Log in to see your matches and messages."</p>
                <form class="form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in…" } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "New here? " <a href=AppRoute::Register.path()>"Create an account"</a>
                </p>
            </div>
        </section>
    }
}
