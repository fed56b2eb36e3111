//! About page.

use leptos::prelude::*;

use crate::routes::AppRoute;

const STATS: [(&str, &str); 3] = [("12k+", "roommates matched"), ("3.4k", "rooms listed"), ("4.8★", "average rating")];

const VALUES: [(&str, &str); 3] = [
    ("Compatibility first", "We match on habits and routines, not just budget and location."),
    ("Safety by default", "Profiles are reviewed and conversations stay on-platform until you're ready."),
    ("No surprises", "Clear pricing tiers and listings that show the full monthly cost."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page about">
            <header class="page__header">
                <h1>"About Nestmate"</h1>
                <p class="page__lead">
                    "Nestmate started with a bad roommate story and a simple idea: finding someone to live with "
                    "should feel more like meeting a friend than answering a classified ad."
                </p>
            </header>
            <div class="stats">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stats__item">
                                <span class="stats__value">{*value}</span>
                                <span class="stats__label">{*label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="card-grid">
                {VALUES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <article class="card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="about__cta">
                "Questions? " <a href=AppRoute::Contact.path()>"Get in touch"</a> "."
            </p>
        </section>
    }
}
