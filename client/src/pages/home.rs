//! Marketing landing page.

use leptos::prelude::*;

use crate::components::property_card::PropertyCard;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

const FEATURED_LISTINGS: usize = 3;

const STEPS: [(&str, &str, &str); 3] = [
    ("1", "Create your profile", "Tell us how you live: sleep schedule, pets, budget and neighborhood."),
    ("2", "Swipe and match", "Browse compatible people every day and match when the interest is mutual."),
    ("3", "Move in", "Chat with your matches, tour places together and sign with confidence."),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    ("“Found a roommate who actually does the dishes. Ten out of ten.”", "Hannah, Brooklyn"),
    ("“Listed my spare room on Monday, had three great matches by Friday.”", "Marcus, Hoboken"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cta_href = move || {
        if auth.with(AuthState::is_signed_in) { AppRoute::Dashboard.path() } else { AppRoute::Register.path() }
    };
    let featured = crate::data::properties()
        .into_iter()
        .take(FEATURED_LISTINGS)
        .map(|property| view! { <PropertyCard property=property/> })
        .collect::<Vec<_>>();

    view! {
        <section class="hero">
            <div class="hero__content">
                <h1 class="hero__title">"Find your people. Find your place."</h1>
                <p class="hero__lead">
                    "Match with roommates who share your rhythm, then find a home that fits you both."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--lg" href=cta_href>"Get started"</a>
                    <a class="btn btn--ghost btn--lg" href=AppRoute::Properties.path()>"Browse rooms"</a>
                </div>
            </div>
        </section>

        <section class="page steps">
            <h2 class="section-title">"How it works"</h2>
            <div class="card-grid">
                {STEPS
                    .iter()
                    .map(|(n, title, body)| {
                        view! {
                            <article class="card step">
                                <span class="step__number">{*n}</span>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page featured">
            <div class="section-header">
                <h2 class="section-title">"Featured rooms"</h2>
                <a href=AppRoute::Properties.path()>"See all listings →"</a>
            </div>
            <div class="property-grid">{featured}</div>
        </section>

        <section class="page testimonials">
            <h2 class="section-title">"Loved by roommates"</h2>
            <div class="card-grid">
                {TESTIMONIALS
                    .iter()
                    .map(|(quote, who)| {
                        view! {
                            <blockquote class="card testimonial">
                                <p>{*quote}</p>
                                <cite>{*who}</cite>
                            </blockquote>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="cta-band">
            <h2>"Ready to find your nest?"</h2>
            <a class="btn btn--primary btn--lg" href=AppRoute::Pricing.path()>"Compare plans"</a>
        </section>
    }
}
