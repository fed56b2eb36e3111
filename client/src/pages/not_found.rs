//! Fallback page for unknown routes.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--narrow not-found">
            <h1>"404"</h1>
            <p>"We couldn't find that page. It may have moved out."</p>
            <a class="btn btn--primary" href=AppRoute::Home.path()>"Back home"</a>
        </section>
    }
}
