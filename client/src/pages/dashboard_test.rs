use super::*;
use crate::state::onboarding::{LivingPlan, UserPath};

#[test]
fn greeting_follows_time_of_day() {
    assert_eq!(greeting(8), "Good morning");
    assert_eq!(greeting(12), "Good afternoon");
    assert_eq!(greeting(17), "Good afternoon");
    assert_eq!(greeting(21), "Good evening");
    assert_eq!(greeting(2), "Good evening");
}

#[test]
fn plan_summary_without_path() {
    assert_eq!(plan_summary(OnboardingState::default()), "No path chosen yet");
}

#[test]
fn plan_summary_roommate_includes_plan() {
    let onboarding = OnboardingState { user_path: Some(UserPath::Roommate), living_plan: Some(LivingPlan::Comfort) };
    assert_eq!(plan_summary(onboarding), format!("{} · Comfort plan", UserPath::Roommate.title()));
}

#[test]
fn plan_summary_other_paths_ignore_plan() {
    let onboarding = OnboardingState { user_path: Some(UserPath::Host), living_plan: Some(LivingPlan::Elite) };
    assert_eq!(plan_summary(onboarding), UserPath::Host.title());
}
