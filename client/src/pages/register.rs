//! Registration page with per-field validation.

use leptos::prelude::*;

use crate::components::form::{FieldMessage, TextField};
use crate::components::guarded::Guarded;
use crate::components::toast_host::notify;
use crate::net::mock_api::{self, AuthError, RegisterForm};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::validation::{Field, FieldErrors, MIN_PASSWORD_LEN};

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Guarded route=AppRoute::Register>
            <RegisterFormView/>
        </Guarded>
    }
}

#[component]
fn RegisterFormView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let accept_terms = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
            accept_terms: accept_terms.get(),
        };
        if let Err(AuthError::Form(field_errors)) = mock_api::check_register(&form) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);

        leptos::task::spawn_local(async move {
            match mock_api::register(&form).await {
                Ok(user) => {
                    notify(toasts, ToastKind::Success, "Account created! Let's set up your profile.");
                    auth.update(|a| a.sign_in(user));
                }
                Err(AuthError::Form(field_errors)) => errors.set(field_errors),
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"It takes less than a minute."</p>
                <form class="form" on:submit=on_submit novalidate>
                    <TextField label="Full name" value=name errors=errors field=Field::Name autocomplete="name"/>
                    <TextField
                        label="Email"
                        value=email
                        errors=errors
                        field=Field::Email
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                    />
                    <TextField
                        label="Password"
                        value=password
                        errors=errors
                        field=Field::Password
                        input_type="password"
                        placeholder=format!("At least {MIN_PASSWORD_LEN} characters")
                        autocomplete="new-password"
                    />
                    <TextField
                        label="Confirm password"
                        value=confirm
                        errors=errors
                        field=Field::ConfirmPassword
                        input_type="password"
                        autocomplete="new-password"
                    />
                    <label class="field field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || accept_terms.get()
                            on:change=move |ev| accept_terms.set(event_target_checked(&ev))
                        />
                        <span>"I agree to the terms of service and privacy policy"</span>
                    </label>
                    <FieldMessage errors=errors field=Field::Terms/>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account…" } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href=AppRoute::Login.path()>"Log in"</a>
                </p>
            </div>
        </section>
    }
}
