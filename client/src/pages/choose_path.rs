//! First onboarding step: pick how you want to use Nestmate.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guarded::Guarded;
use crate::routes::{AppRoute, Flags, next_step};
use crate::state::auth::AuthState;
use crate::state::onboarding::{OnboardingState, UserPath};

#[component]
pub fn ChoosePathPage() -> impl IntoView {
    view! {
        <Guarded route=AppRoute::ChoosePath>
            <PathPicker/>
        </Guarded>
    }
}

#[component]
fn PathPicker() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let onboarding = expect_context::<RwSignal<OnboardingState>>();
    let navigate = use_navigate();

    let on_choose = Callback::new(move |path: UserPath| {
        onboarding.update(|o| o.choose_path(path));
        let flags = Flags::new(&auth.get_untracked(), onboarding.get_untracked());
        navigate(next_step(flags).path(), NavigateOptions::default());
    });

    view! {
        <section class="page page--narrow onboarding">
            <header class="page__header">
                <span class="onboarding__step">"Step 1"</span>
                <h1>{move || format!("Hi {}, what brings you here?", auth.with(AuthState::display_name))}</h1>
                <p class="page__lead">"You can change this later in settings."</p>
            </header>
            <div class="path-grid">
                {UserPath::ALL
                    .into_iter()
                    .map(|path| {
                        let selected = move || onboarding.get().user_path == Some(path);
                        view! {
                            <button
                                class="path-card"
                                class:path-card--selected=selected
                                on:click=move |_| on_choose.run(path)
                            >
                                <span class="path-card__icon" aria-hidden="true">{path.icon()}</span>
                                <h3 class="path-card__title">{path.title()}</h3>
                                <p class="path-card__blurb">{path.blurb()}</p>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
