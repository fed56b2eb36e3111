use super::*;

#[test]
fn user_path_round_trips_through_storage_values() {
    for path in UserPath::ALL {
        assert_eq!(UserPath::parse(path.as_str()), Some(path));
    }
    assert_eq!(UserPath::parse("landlord"), None);
}

#[test]
fn living_plan_round_trips_through_storage_values() {
    for plan in LivingPlan::ALL {
        assert_eq!(LivingPlan::parse(plan.as_str()), Some(plan));
    }
    assert_eq!(LivingPlan::parse("platinum"), None);
}

#[test]
fn plans_are_priced_in_ascending_order() {
    let prices: Vec<u32> = LivingPlan::ALL.iter().map(|p| p.monthly_price()).collect();
    assert_eq!(prices, vec![0, 15, 29]);
    assert!(LivingPlan::Comfort.is_popular());
    assert!(!LivingPlan::Elite.is_popular());
}

#[test]
fn from_stored_ignores_unknown_values() {
    let state = OnboardingState::from_stored(Some("roommate"), Some("gold"));
    assert_eq!(state.user_path, Some(UserPath::Roommate));
    assert_eq!(state.living_plan, None);
}

#[test]
fn roommate_path_requires_plan_to_complete() {
    let mut state = OnboardingState::default();
    assert!(!state.is_complete());
    state.choose_path(UserPath::Roommate);
    assert!(!state.is_complete());
    state.choose_plan(LivingPlan::Comfort);
    assert!(state.is_complete());
}

#[test]
fn seeker_and_host_skip_the_plan_step() {
    for path in [UserPath::Seeker, UserPath::Host] {
        let mut state = OnboardingState::default();
        state.choose_path(path);
        assert!(state.is_complete(), "{path:?} should complete without a plan");
    }
}

#[test]
fn clear_resets_both_choices() {
    let mut state = OnboardingState::from_stored(Some("host"), Some("elite"));
    state.clear();
    assert_eq!(state, OnboardingState::default());
}
