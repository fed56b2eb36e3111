//! Pseudo-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components. There is no real session:
//! the "signed-in" user is whatever JSON sits under the `user` storage key.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::data::types::User;
use crate::util::storage;

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays `true` until the browser has read `localStorage`, so the
/// server render and the first hydrated frame agree and guards do not fire early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// State after the stored session has been read.
    pub fn loaded(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    pub fn load() -> Self {
        Self::loaded(storage::load_json(storage::USER_KEY))
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Store `user` as the current session.
    pub fn sign_in(&mut self, user: User) {
        storage::save_json(storage::USER_KEY, &user);
        self.user = Some(user);
        self.loading = false;
    }

    /// Replace the stored profile of the signed-in user.
    pub fn update_profile(&mut self, user: User) {
        if self.user.is_some() {
            self.sign_in(user);
        }
    }

    /// Drop the session and every per-session flag.
    pub fn sign_out(&mut self) {
        storage::clear_session();
        self.user = None;
        self.loading = false;
    }

    /// Display name, or a neutral fallback while signed out.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "Guest".to_owned(), |u| u.name.clone())
    }
}
