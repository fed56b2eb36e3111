use super::*;
use crate::state::onboarding::{LivingPlan, UserPath};

fn signed_in(path: Option<UserPath>, plan: Option<LivingPlan>) -> Flags {
    Flags { signed_in: true, onboarding: OnboardingState { user_path: path, living_plan: plan } }
}

// =============================================================
// next_step
// =============================================================

#[test]
fn next_step_sends_visitors_to_login() {
    assert_eq!(next_step(Flags::default()), AppRoute::Login);
}

#[test]
fn next_step_asks_for_path_then_plan() {
    assert_eq!(next_step(signed_in(None, None)), AppRoute::ChoosePath);
    assert_eq!(next_step(signed_in(Some(UserPath::Roommate), None)), AppRoute::LivingPlan);
    assert_eq!(
        next_step(signed_in(Some(UserPath::Roommate), Some(LivingPlan::Basic))),
        AppRoute::Dashboard
    );
}

#[test]
fn next_step_skips_plan_for_seekers_and_hosts() {
    assert_eq!(next_step(signed_in(Some(UserPath::Seeker), None)), AppRoute::Dashboard);
    assert_eq!(next_step(signed_in(Some(UserPath::Host), None)), AppRoute::Dashboard);
}

// =============================================================
// guard_redirect
// =============================================================

#[test]
fn public_routes_never_redirect() {
    for route in [AppRoute::Home, AppRoute::About, AppRoute::Pricing, AppRoute::Contact, AppRoute::Properties] {
        assert_eq!(guard_redirect(route, Flags::default()), None);
        assert_eq!(guard_redirect(route, signed_in(None, None)), None);
    }
}

#[test]
fn guest_routes_bounce_signed_in_users_to_next_step() {
    assert_eq!(guard_redirect(AppRoute::Login, Flags::default()), None);
    assert_eq!(guard_redirect(AppRoute::Login, signed_in(None, None)), Some(AppRoute::ChoosePath));
    assert_eq!(
        guard_redirect(AppRoute::Register, signed_in(Some(UserPath::Host), None)),
        Some(AppRoute::Dashboard)
    );
}

#[test]
fn member_routes_require_login() {
    for route in [AppRoute::Dashboard, AppRoute::Matching, AppRoute::Messages, AppRoute::Settings] {
        assert_eq!(guard_redirect(route, Flags::default()), Some(AppRoute::Login));
    }
}

#[test]
fn member_routes_require_finished_onboarding() {
    assert_eq!(guard_redirect(AppRoute::Matching, signed_in(None, None)), Some(AppRoute::ChoosePath));
    assert_eq!(
        guard_redirect(AppRoute::Messages, signed_in(Some(UserPath::Roommate), None)),
        Some(AppRoute::LivingPlan)
    );
    assert_eq!(
        guard_redirect(AppRoute::Matching, signed_in(Some(UserPath::Roommate), Some(LivingPlan::Elite))),
        None
    );
}

#[test]
fn onboarding_routes_need_a_session() {
    assert_eq!(guard_redirect(AppRoute::ChoosePath, Flags::default()), Some(AppRoute::Login));
    assert_eq!(guard_redirect(AppRoute::LivingPlan, Flags::default()), Some(AppRoute::Login));
    assert_eq!(guard_redirect(AppRoute::ChoosePath, signed_in(None, None)), None);
}

#[test]
fn living_plan_requires_a_path_first() {
    assert_eq!(guard_redirect(AppRoute::LivingPlan, signed_in(None, None)), Some(AppRoute::ChoosePath));
    assert_eq!(guard_redirect(AppRoute::LivingPlan, signed_in(Some(UserPath::Seeker), None)), None);
}

#[test]
fn property_href_builds_detail_path() {
    assert_eq!(property_href(7), "/properties/7");
}
