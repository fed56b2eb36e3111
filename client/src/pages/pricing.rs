//! Public pricing page listing the living-plan tiers.

use leptos::prelude::*;

use crate::components::plan_card::PlanCard;
use crate::routes::AppRoute;
use crate::state::onboarding::LivingPlan;

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <section class="page pricing">
            <header class="page__header">
                <h1>"Simple, honest pricing"</h1>
                <p class="page__lead">"Start free. Upgrade when you want more matches and more support."</p>
            </header>
            <div class="plan-grid">
                {LivingPlan::ALL
                    .into_iter()
                    .map(|plan| view! { <PlanCard plan=plan href=AppRoute::Register.path()/> })
                    .collect::<Vec<_>>()}
            </div>
            <p class="pricing__note">"Prices are per month. Cancel any time."</p>
        </section>
    }
}
