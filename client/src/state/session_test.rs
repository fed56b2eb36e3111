use super::*;
use crate::data::types::User;
use crate::state::matching::SwipeDirection;
use crate::state::onboarding::{LivingPlan, UserPath};

const TODAY: &str = "2024-03-01";

fn signed_in() -> (AuthState, OnboardingState, MatchingState) {
    let user = User { id: "u1".to_owned(), email: "ada@example.com".to_owned(), name: "Ada".to_owned(), avatar_url: None };
    let onboarding = OnboardingState { user_path: Some(UserPath::Roommate), living_plan: Some(LivingPlan::Comfort) };
    let mut matching = MatchingState::load(TODAY);
    let liked = matching.queue.iter().position(|p| p.likes_you).unwrap_or(0);
    for _ in 0..=liked {
        matching.swipe(SwipeDirection::Right, TODAY).expect("swipe");
    }
    (AuthState::loaded(Some(user)), onboarding, matching)
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_resets_onboarding_and_reloads_matching() {
    let (mut auth, mut onboarding, mut matching) = signed_in();
    assert!(!matching.matches.is_empty());

    end(SessionEnd::Logout, &mut auth, &mut onboarding, &mut matching, TODAY);

    assert!(!auth.is_signed_in());
    assert!(!auth.loading);
    assert_eq!(onboarding, OnboardingState::default());
    assert_eq!(matching, MatchingState::load(TODAY));
    assert_eq!(matching.position, 0);
    assert!(matching.matches.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn delete_account_resets_the_same_state() {
    let (mut auth, mut onboarding, mut matching) = signed_in();

    end(SessionEnd::DeleteAccount, &mut auth, &mut onboarding, &mut matching, TODAY);

    assert!(auth.user.is_none());
    assert_eq!(onboarding.user_path, None);
    assert_eq!(onboarding.living_plan, None);
    assert_eq!(matching.remaining_today(TODAY), crate::state::matching::DAILY_SWIPE_LIMIT);
}
