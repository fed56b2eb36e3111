//! Account settings: profile, password, preferences and account removal.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form::TextField;
use crate::components::guarded::Guarded;
use crate::components::toast_host::notify;
use crate::data::types::User;
use crate::net::mock_api::{self, AuthError, PasswordChange};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::matching::MatchingState;
use crate::state::onboarding::OnboardingState;
use crate::state::session::SessionEnd;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::UiState;
use crate::util::auth::end_session;
use crate::util::dark_mode;
use crate::util::validation::{Field, FieldErrors};

/// Profile edited in the form, keeping the identity of `base`.
pub fn profile_draft(base: &User, name: &str, email: &str, avatar_url: &str) -> User {
    let avatar_url = avatar_url.trim();
    User {
        id: base.id.clone(),
        name: name.to_owned(),
        email: email.to_owned(),
        avatar_url: (!avatar_url.is_empty()).then(|| avatar_url.to_owned()),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <Guarded route=AppRoute::Settings>
            <SettingsContent/>
        </Guarded>
    }
}

#[component]
fn SettingsContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let onboarding = expect_context::<RwSignal<OnboardingState>>();
    let matching = expect_context::<RwSignal<MatchingState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    view! {
        <section class="page page--narrow settings">
            <header class="page__header">
                <h1>"Settings"</h1>
            </header>
            <ProfileForm auth=auth toasts=toasts/>
            <PasswordForm toasts=toasts/>

            <section class="card settings__section">
                <h2>"Preferences"</h2>
                <label class="field field--checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || ui.get().dark_mode
                        on:change=move |_| {
                            let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                    />
                    <span>"Dark mode"</span>
                </label>
                <p class="settings__onboarding">
                    {move || {
                        onboarding
                            .get()
                            .user_path
                            .map_or_else(|| "No path chosen".to_owned(), |p| format!("Path: {}", p.title()))
                    }}
                    " · "
                    <a href=AppRoute::ChoosePath.path()>"Change path"</a>
                </p>
                <Show when=move || onboarding.get().user_path.is_some_and(|p| p.needs_living_plan())>
                    <p class="settings__onboarding">
                        {move || {
                            onboarding
                                .get()
                                .living_plan
                                .map_or_else(|| "No plan chosen".to_owned(), |p| format!("Plan: {}", p.title()))
                        }}
                        " · "
                        <a href=AppRoute::LivingPlan.path()>"Change plan"</a>
                    </p>
                </Show>
            </section>

            <section class="card settings__section settings__danger">
                <h2>"Account"</h2>
                <button
                    class="btn btn--ghost"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| {
                            navigate(AppRoute::Login.path(), NavigateOptions::default());
                            end_session(SessionEnd::Logout, auth, onboarding, matching);
                            notify(toasts, ToastKind::Info, "You have been logged out");
                        }
                    }
                >
                    "Log out"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| {
                        #[cfg(feature = "hydrate")]
                        {
                            let confirmed = web_sys::window()
                                .and_then(|w| w.confirm_with_message("Delete your account and all local data?").ok())
                                .unwrap_or(false);
                            if !confirmed {
                                return;
                            }
                        }
                        navigate(AppRoute::Home.path(), NavigateOptions::default());
                        end_session(SessionEnd::DeleteAccount, auth, onboarding, matching);
                        notify(toasts, ToastKind::Info, "Your account has been deleted");
                    }
                >
                    "Delete account"
                </button>
            </section>
        </section>
    }
}

#[component]
fn ProfileForm(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) -> impl IntoView {
    let current = auth.get_untracked().user;
    let name = RwSignal::new(current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(current.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let avatar = RwSignal::new(current.as_ref().and_then(|u| u.avatar_url.clone()).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(base) = auth.get_untracked().user else {
            return;
        };
        let draft = profile_draft(&base, &name.get(), &email.get(), &avatar.get());
        if let Err(field_errors) = mock_api::check_profile(&draft) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);

        leptos::task::spawn_local(async move {
            match mock_api::update_profile(draft).await {
                Ok(user) => {
                    name.set(user.name.clone());
                    email.set(user.email.clone());
                    avatar.set(user.avatar_url.clone().unwrap_or_default());
                    auth.update(|a| a.update_profile(user));
                    notify(toasts, ToastKind::Success, "Profile updated");
                }
                Err(field_errors) => errors.set(field_errors),
            }
            busy.set(false);
        });
    };

    let initials = move || auth.with(|a| a.user.as_ref().map(User::initials).unwrap_or_default());

    view! {
        <section class="card settings__section">
            <h2>"Profile"</h2>
            <div class="settings__avatar">
                {move || {
                    let url = avatar.get();
                    if url.trim().is_empty() {
                        view! { <span class="avatar avatar--lg avatar--initials">{initials}</span> }.into_any()
                    } else {
                        view! { <img class="avatar avatar--lg" src=url alt="Profile photo"/> }.into_any()
                    }
                }}
            </div>
            <form class="form" on:submit=on_submit novalidate>
                <TextField label="Display name" value=name errors=errors field=Field::Name autocomplete="name"/>
                <TextField
                    label="Email"
                    value=email
                    errors=errors
                    field=Field::Email
                    input_type="email"
                    autocomplete="email"
                />
                <TextField
                    label="Avatar URL"
                    value=avatar
                    errors=errors
                    field=Field::AvatarUrl
                    input_type="url"
                    placeholder="https://…"
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving…" } else { "Save profile" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn PasswordForm(toasts: RwSignal<ToastState>) -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let change = PasswordChange { current: current.get(), new: new.get(), confirm: confirm.get() };
        if let Err(AuthError::Form(field_errors)) = mock_api::check_password_change(&change) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        busy.set(true);

        leptos::task::spawn_local(async move {
            match mock_api::change_password(&change).await {
                Ok(()) => {
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                    notify(toasts, ToastKind::Success, "Password changed");
                }
                Err(AuthError::Form(field_errors)) => errors.set(field_errors),
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="card settings__section">
            <h2>"Change password"</h2>
            <form class="form" on:submit=on_submit novalidate>
                <TextField
                    label="Current password"
                    value=current
                    errors=errors
                    field=Field::CurrentPassword
                    input_type="password"
                    autocomplete="current-password"
                />
                <TextField
                    label="New password"
                    value=new
                    errors=errors
                    field=Field::Password
                    input_type="password"
                    autocomplete="new-password"
                />
                <TextField
                    label="Confirm new password"
                    value=confirm
                    errors=errors
                    field=Field::ConfirmPassword
                    input_type="password"
                    autocomplete="new-password"
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Updating…" } else { "Update password" }}
                </button>
            </form>
        </section>
    }
}
