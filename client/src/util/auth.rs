//! Shared route-guard wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page installs the same effect: once the session has loaded,
//! ask `routes::guard_redirect` where the user belongs and navigate there.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::routes::{AppRoute, Flags, guard_redirect};
use crate::state::auth::AuthState;
use crate::state::matching::MatchingState;
use crate::state::onboarding::OnboardingState;
use crate::state::session::{self, SessionEnd};
use crate::util::clock;

/// Redirect target for `route`, or `None` while the session is still loading.
pub fn pending_redirect(route: AppRoute, auth: &AuthState, onboarding: OnboardingState) -> Option<AppRoute> {
    if auth.loading {
        return None;
    }
    guard_redirect(route, Flags::new(auth, onboarding))
}

/// Whether the browser is still showing `route`.
///
/// A page that navigates away and then signs out must not be pulled to the
/// login screen by its own guard before it unmounts.
pub fn still_on_route(route: AppRoute, pathname: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let current = if trimmed.is_empty() { "/" } else { trimmed };
    current == route.path()
}

/// Navigate away from `route` whenever the guard rules say so.
pub fn install_route_guard<F>(route: AppRoute, auth: RwSignal<AuthState>, onboarding: RwSignal<OnboardingState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let state = auth.get();
        let Some(target) = pending_redirect(route, &state, onboarding.get()) else {
            return;
        };
        if !location.pathname.with_untracked(|p| still_on_route(route, p)) {
            return;
        }
        navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}

/// End the session across the shared state signals. Auth is written last so
/// guards observe consistent onboarding and matching state.
pub fn end_session(
    end: SessionEnd,
    auth: RwSignal<AuthState>,
    onboarding: RwSignal<OnboardingState>,
    matching: RwSignal<MatchingState>,
) {
    let mut next_auth = auth.get_untracked();
    let mut next_onboarding = onboarding.get_untracked();
    let mut next_matching = matching.get_untracked();
    session::end(end, &mut next_auth, &mut next_onboarding, &mut next_matching, &clock::today_key());
    matching.set(next_matching);
    onboarding.set(next_onboarding);
    auth.set(next_auth);
}

/// Whether a guarded page may render its content yet.
pub fn may_render(route: AppRoute, auth: &AuthState, onboarding: OnboardingState) -> bool {
    !auth.loading && pending_redirect(route, auth, onboarding).is_none()
}
