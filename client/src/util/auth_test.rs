use super::*;
use crate::data::types::User;
use crate::state::onboarding::UserPath;

fn user() -> User {
    User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: "Alice".to_owned(), avatar_url: None }
}

#[test]
fn no_redirect_while_loading() {
    let state = AuthState::default();
    assert_eq!(pending_redirect(AppRoute::Dashboard, &state, OnboardingState::default()), None);
    assert!(!may_render(AppRoute::Dashboard, &state, OnboardingState::default()));
}

#[test]
fn redirect_unauth_when_loaded_and_user_missing() {
    let state = AuthState::loaded(None);
    assert_eq!(
        pending_redirect(AppRoute::Messages, &state, OnboardingState::default()),
        Some(AppRoute::Login)
    );
}

#[test]
fn member_page_renders_when_onboarded() {
    let state = AuthState::loaded(Some(user()));
    let onboarding = OnboardingState { user_path: Some(UserPath::Host), living_plan: None };
    assert!(may_render(AppRoute::Settings, &state, onboarding));
}

#[test]
fn public_page_renders_once_loaded() {
    assert!(may_render(AppRoute::Home, &AuthState::loaded(None), OnboardingState::default()));
}

// =============================================================
// still_on_route
// =============================================================

#[test]
fn guard_applies_only_on_its_own_path() {
    assert!(still_on_route(AppRoute::Settings, "/settings"));
    assert!(still_on_route(AppRoute::Settings, "/settings/"));
    assert!(still_on_route(AppRoute::Home, "/"));
    assert!(!still_on_route(AppRoute::Settings, "/"));
    assert!(!still_on_route(AppRoute::Settings, "/login"));
}

#[test]
fn signed_out_settings_page_left_for_home_is_not_redirected() {
    let state = AuthState::loaded(None);
    assert_eq!(
        pending_redirect(AppRoute::Settings, &state, OnboardingState::default()),
        Some(AppRoute::Login)
    );
    assert!(!still_on_route(AppRoute::Settings, AppRoute::Home.path()));
}
