//! Route wrapper that applies navigation guards before rendering a page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::onboarding::OnboardingState;
use crate::util::auth::{install_route_guard, may_render};

/// Render `children` only once the session has loaded and `route` allows it.
/// Otherwise show a spinner while the guard redirects.
#[component]
pub fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let onboarding = expect_context::<RwSignal<OnboardingState>>();
    install_route_guard(route, auth, onboarding, use_navigate());

    view! {
        <Show
            when=move || may_render(route, &auth.get(), onboarding.get())
            fallback=|| view! { <PageLoading/> }
        >
            {children()}
        </Show>
    }
}

/// Centered spinner used while a page waits for the stored session.
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <div class="page-loading" role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span class="sr-only">"Loading…"</span>
        </div>
    }
}
