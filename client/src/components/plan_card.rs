//! Living-plan tier card, shared by the pricing and plan-selection pages.

use leptos::prelude::*;

use crate::state::onboarding::LivingPlan;
use crate::util::format::plan_price;

/// A pricing tier. With `on_choose` it renders a select button, otherwise a link.
#[component]
pub fn PlanCard(
    plan: LivingPlan,
    #[prop(optional)] selected: bool,
    #[prop(optional)] on_choose: Option<Callback<LivingPlan>>,
    #[prop(optional)] href: Option<&'static str>,
) -> impl IntoView {
    let features = plan
        .features()
        .iter()
        .map(|f| view! { <li>{*f}</li> })
        .collect::<Vec<_>>();

    let action = match (on_choose, href) {
        (Some(on_choose), _) => view! {
            <button
                class="btn btn--primary plan-card__cta"
                disabled=selected
                on:click=move |_| on_choose.run(plan)
            >
                {if selected { "Current plan" } else { "Choose plan" }}
            </button>
        }
        .into_any(),
        (None, Some(href)) => view! { <a class="btn btn--primary plan-card__cta" href=href>"Get started"</a> }.into_any(),
        (None, None) => ().into_any(),
    };

    view! {
        <article class="plan-card" class:plan-card--popular=plan.is_popular() class:plan-card--selected=selected>
            <Show when=move || plan.is_popular()>
                <span class="plan-card__badge">"Most popular"</span>
            </Show>
            <h3 class="plan-card__title">{plan.title()}</h3>
            <p class="plan-card__price">{plan_price(plan.monthly_price())}</p>
            <ul class="plan-card__features">{features}</ul>
            {action}
        </article>
    }
}
