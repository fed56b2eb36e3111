//! Second onboarding step for roommates: pick a living plan.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guarded::Guarded;
use crate::components::plan_card::PlanCard;
use crate::components::toast_host::notify;
use crate::routes::AppRoute;
use crate::state::onboarding::{LivingPlan, OnboardingState};
use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn LivingPlanPage() -> impl IntoView {
    view! {
        <Guarded route=AppRoute::LivingPlan>
            <PlanPicker/>
        </Guarded>
    }
}

#[component]
fn PlanPicker() -> impl IntoView {
    let onboarding = expect_context::<RwSignal<OnboardingState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let on_choose = Callback::new(move |plan: LivingPlan| {
        onboarding.update(|o| o.choose_plan(plan));
        notify(toasts, ToastKind::Success, format!("{} plan selected", plan.title()));
        navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
    });

    view! {
        <section class="page onboarding">
            <header class="page__header">
                <span class="onboarding__step">"Step 2"</span>
                <h1>"Choose your living plan"</h1>
                <p class="page__lead">"Pick the level of matching and support that suits you."</p>
            </header>
            <div class="plan-grid">
                {move || {
                    let current = onboarding.get().living_plan;
                    LivingPlan::ALL
                        .into_iter()
                        .map(|plan| view! { <PlanCard plan=plan selected=current == Some(plan) on_choose=on_choose/> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <p class="onboarding__back">
                <a href=AppRoute::ChoosePath.path()>"← Change path"</a>
            </p>
        </section>
    }
}
