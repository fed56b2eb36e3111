//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, toast_host::ToastHost};
use crate::pages::{
    about::AboutPage, choose_path::ChoosePathPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage,
    living_plan::LivingPlanPage, login::LoginPage, matching::MatchingPage, messages::MessagesPage,
    not_found::NotFoundPage, pricing::PricingPage, properties::PropertiesPage, property_detail::PropertyDetailPage,
    register::RegisterPage, settings::SettingsPage,
};
use crate::state::{
    auth::AuthState, matching::MatchingState, messages::InboxState, onboarding::OnboardingState, toast::ToastState,
    ui::UiState,
};
use crate::util::{clock, dark_mode};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Find roommates and rooms that fit your life."/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the stored session once in
/// the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let onboarding = RwSignal::new(OnboardingState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let inbox = RwSignal::new(InboxState::new(crate::data::conversations()));
    let matching = RwSignal::new(MatchingState::default());

    provide_context(auth);
    provide_context(onboarding);
    provide_context(ui);
    provide_context(toasts);
    provide_context(inbox);
    provide_context(matching);

    // Effects only run in the browser, so the server render stays in the
    // loading state. Auth is set last: guards react to it.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        onboarding.set(OnboardingState::load());
        matching.set(MatchingState::load(&clock::today_key()));
        auth.set(AuthState::load());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/nestmate.css"/>
        <Title text="Nestmate"/>
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("properties") view=PropertiesPage/>
                    <Route path=(StaticSegment("properties"), ParamSegment("id")) view=PropertyDetailPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("choose-path") view=ChoosePathPage/>
                    <Route path=StaticSegment("living-plan") view=LivingPlanPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("matching") view=MatchingPage/>
                    <Route path=StaticSegment("messages") view=MessagesPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
