//! Member dashboard summarizing onboarding choices, matches and inbox.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::components::property_card::PropertyCard;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::matching::{DAILY_SWIPE_LIMIT, MatchingState};
use crate::state::messages::InboxState;
use crate::state::onboarding::OnboardingState;
use crate::util::clock;
use crate::util::format::plural;

const RECOMMENDED_LISTINGS: usize = 3;

/// Time-of-day greeting for a local `hour`.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// One-line description of the onboarding choices.
pub fn plan_summary(onboarding: OnboardingState) -> String {
    match (onboarding.user_path, onboarding.living_plan) {
        (None, _) => "No path chosen yet".to_owned(),
        (Some(path), Some(plan)) if path.needs_living_plan() => format!("{} · {} plan", path.title(), plan.title()),
        (Some(path), _) => path.title().to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Guarded route=AppRoute::Dashboard>
            <DashboardContent/>
        </Guarded>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let onboarding = expect_context::<RwSignal<OnboardingState>>();
    let matching = expect_context::<RwSignal<MatchingState>>();
    let inbox = expect_context::<RwSignal<InboxState>>();

    let today = clock::today_key();
    let first_name = move || {
        auth.with(|a| a.display_name().split_whitespace().next().map(str::to_owned).unwrap_or_default())
    };
    let remaining = Memo::new(move |_| matching.with(|m| m.remaining_today(&today)));
    let unread = move || inbox.with(InboxState::total_unread);
    let matches = move || matching.with(MatchingState::matched_profiles);
    let recommended = crate::data::properties()
        .into_iter()
        .take(RECOMMENDED_LISTINGS)
        .map(|property| view! { <PropertyCard property=property compact=true/> })
        .collect::<Vec<_>>();

    view! {
        <section class="page dashboard">
            <header class="dashboard__header">
                <div>
                    <h1>{move || format!("{}, {}!", greeting(clock::current_hour()), first_name())}</h1>
                    <p class="dashboard__plan">{move || plan_summary(onboarding.get())}</p>
                </div>
                <a class="btn btn--primary" href=AppRoute::Matching.path()>"Start matching"</a>
            </header>

            <div class="stats">
                <div class="stats__item">
                    <span class="stats__value">{move || remaining.get()}</span>
                    <span class="stats__label">{format!("of {DAILY_SWIPE_LIMIT} swipes left today")}</span>
                </div>
                <div class="stats__item">
                    <span class="stats__value">{move || matches().len()}</span>
                    <span class="stats__label">"matches"</span>
                </div>
                <a class="stats__item" href=AppRoute::Messages.path()>
                    <span class="stats__value">{unread}</span>
                    <span class="stats__label">"unread messages"</span>
                </a>
            </div>

            <div class="dashboard__grid">
                <section class="card dashboard__matches">
                    <h2>"Your matches"</h2>
                    <Show
                        when=move || !matches().is_empty()
                        fallback=|| {
                            view! {
                                <p class="empty">
                                    "No matches yet. Like someone who likes you back to match."
                                </p>
                            }
                        }
                    >
                        <ul class="match-list">
                            {move || {
                                matches()
                                    .into_iter()
                                    .map(|profile| {
                                        let avatar = profile.images.first().cloned().unwrap_or_default();
                                        view! {
                                            <li class="match-list__item">
                                                <img class="avatar" src=avatar alt=profile.name.clone()/>
                                                <div>
                                                    <strong>{profile.name.clone()}</strong>
                                                    <span class="match-list__meta">
                                                        {format!("{}% compatible · {}", profile.compatibility, profile.location)}
                                                    </span>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                    <a href=AppRoute::Matching.path()>
                        {move || format!("{} to go today →", plural(remaining.get(), "swipe", "swipes"))}
                    </a>
                </section>

                <section class="card dashboard__listings">
                    <div class="section-header">
                        <h2>"Recommended for you"</h2>
                        <a href=AppRoute::Properties.path()>"Browse all"</a>
                    </div>
                    <div class="property-list">{recommended}</div>
                </section>
            </div>

            <nav class="dashboard__shortcuts">
                <a href=AppRoute::Settings.path()>"Edit profile"</a>
                <a href=AppRoute::LivingPlan.path()>"Change plan"</a>
                <a href=AppRoute::ChoosePath.path()>"Change path"</a>
            </nav>
        </section>
    }
}
