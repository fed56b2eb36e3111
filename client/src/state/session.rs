//! Ending the pseudo-session.
//!
//! Logging out and deleting the account both reset every per-user model in
//! one place, so the next sign-in in the same tab starts onboarding afresh.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::state::auth::AuthState;
use crate::state::matching::MatchingState;
use crate::state::onboarding::OnboardingState;
use crate::util::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Keeps the daily swipe counter.
    Logout,
    /// Wipes every stored key, the swipe counter included.
    DeleteAccount,
}

/// Reset auth, onboarding and matching for `end`.
///
/// Matching is reloaded from storage afterwards, so a logout keeps today's
/// counter while matches and queue position start over.
pub fn end(end: SessionEnd, auth: &mut AuthState, onboarding: &mut OnboardingState, matching: &mut MatchingState, today: &str) {
    if end == SessionEnd::DeleteAccount {
        storage::clear_all();
    }
    auth.sign_out();
    onboarding.clear();
    *matching = MatchingState::load(today);
}
