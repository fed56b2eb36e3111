//! Top navigation bar with session-aware links.
//!
//! DESIGN
//! ======
//! Signed-out visitors see marketing links plus login/register; signed-in
//! users see the member area. The unread badge reads the shared inbox.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::notify;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::matching::MatchingState;
use crate::state::messages::InboxState;
use crate::state::onboarding::OnboardingState;
use crate::state::session::SessionEnd;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::UiState;
use crate::util::auth::end_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let onboarding = expect_context::<RwSignal<OnboardingState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let inbox = expect_context::<RwSignal<InboxState>>();
    let matching = expect_context::<RwSignal<MatchingState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let signed_in = move || auth.with(AuthState::is_signed_in);
    let unread = move || inbox.with(InboxState::total_unread);
    let close_menu = move |_| ui.update(|u| u.nav_open = false);

    let on_logout = move |_| {
        ui.update(|u| u.nav_open = false);
        navigate(AppRoute::Login.path(), NavigateOptions::default());
        end_session(SessionEnd::Logout, auth, onboarding, matching);
        notify(toasts, ToastKind::Info, "You have been logged out");
    };

    view! {
        <header class="navbar" class:navbar--open=move || ui.get().nav_open>
            <a class="logo navbar__logo" href=AppRoute::Home.path() on:click=close_menu>
                "Nestmate"
            </a>
            <button
                class="navbar__menu-toggle"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
            >
                "☰"
            </button>
            <nav class="navbar__links" aria-label="Main">
                <a href=AppRoute::Properties.path() on:click=close_menu>"Properties"</a>
                <a href=AppRoute::Pricing.path() on:click=close_menu>"Pricing"</a>
                <a href=AppRoute::About.path() on:click=close_menu>"About"</a>
                <a href=AppRoute::Contact.path() on:click=close_menu>"Contact"</a>
            </nav>
            <div class="navbar__actions">
                <button
                    class="btn btn--ghost navbar__theme"
                    title="Toggle dark mode"
                    on:click=move |_| {
                        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                        ui.update(|u| u.dark_mode = next);
                    }
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <a class="btn btn--ghost" href=AppRoute::Login.path() on:click=close_menu>"Log in"</a>
                            <a class="btn btn--primary" href=AppRoute::Register.path() on:click=close_menu>
                                "Sign up"
                            </a>
                        }
                    }
                >
                    <a href=AppRoute::Dashboard.path() on:click=close_menu>"Dashboard"</a>
                    <a href=AppRoute::Matching.path() on:click=close_menu>"Match"</a>
                    <a class="navbar__messages" href=AppRoute::Messages.path() on:click=close_menu>
                        "Messages"
                        <Show when=move || { unread() > 0 }>
                            <span class="badge">{unread}</span>
                        </Show>
                    </a>
                    <a href=AppRoute::Settings.path() on:click=close_menu>"Settings"</a>
                    <span class="navbar__user">{move || auth.with(AuthState::display_name)}</span>
                    <button class="btn btn--ghost" on:click=on_logout.clone()>"Log out"</button>
                </Show>
            </div>
        </header>
    }
}
