use super::*;

fn ada() -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        avatar_url: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    assert!(AuthState::default().loading);
}

// =============================================================
// Session transitions
// =============================================================

#[test]
fn sign_in_sets_user_and_finishes_loading() {
    let mut state = AuthState::default();
    state.sign_in(ada());
    assert!(state.is_signed_in());
    assert!(!state.loading);
    assert_eq!(state.display_name(), "Ada");
}

#[test]
fn sign_out_clears_user() {
    let mut state = AuthState::loaded(Some(ada()));
    state.sign_out();
    assert!(!state.is_signed_in());
    assert_eq!(state.display_name(), "Guest");
}

#[test]
fn update_profile_requires_a_session() {
    let mut state = AuthState::loaded(None);
    state.update_profile(ada());
    assert!(state.user.is_none());

    let mut state = AuthState::loaded(Some(ada()));
    let renamed = User { name: "Ada L.".to_owned(), ..ada() };
    state.update_profile(renamed.clone());
    assert_eq!(state.user, Some(renamed));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_outside_browser_is_signed_out() {
    let state = AuthState::load();
    assert!(!state.loading);
    assert!(state.user.is_none());
}
