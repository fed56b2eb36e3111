//! Site footer.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <span class="logo">"Nestmate"</span>
                <p>"Find the people and the place that feel like home."</p>
            </div>
            <nav class="site-footer__links" aria-label="Footer">
                <a href=AppRoute::About.path()>"About"</a>
                <a href=AppRoute::Pricing.path()>"Pricing"</a>
                <a href=AppRoute::Properties.path()>"Properties"</a>
                <a href=AppRoute::Contact.path()>"Contact"</a>
            </nav>
            <p class="site-footer__legal">"© Nestmate. All listings and profiles are sample data."</p>
        </footer>
    }
}
