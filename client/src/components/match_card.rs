//! Draggable profile card for the swipe matching page.
//!
//! DESIGN
//! ======
//! The card only reports pointer positions; the page owns the drag offset in
//! `MatchingState` and feeds it back through `offset`, so the transform and
//! the swipe decision come from the same number.

#[cfg(test)]
#[path = "match_card_test.rs"]
mod match_card_test;

use leptos::prelude::*;

use crate::data::types::MatchProfile;
use crate::state::matching::{SwipeHint, card_rotation_deg, swipe_hint};
use crate::util::format::monthly_price;

/// Inline style for a card dragged `offset` px. Transitions only when released.
pub fn card_style(offset: f64, dragging: bool) -> String {
    let transition = if dragging { "none" } else { "transform 0.3s ease" };
    format!(
        "transform: translateX({offset:.0}px) rotate({:.1}deg); transition: {transition};",
        card_rotation_deg(offset)
    )
}

/// Photo index after tapping the left (`forward == false`) or right side.
pub fn step_photo(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward { (current + 1) % len } else { (current + len - 1) % len }
}

#[component]
pub fn MatchCard(
    profile: MatchProfile,
    #[prop(into)] offset: Signal<f64>,
    #[prop(into)] dragging: Signal<bool>,
    /// Rendered behind the active card: no interaction, no overlay.
    #[prop(optional)]
    stacked: bool,
    #[prop(optional)] on_drag_start: Option<Callback<f64>>,
    #[prop(optional)] on_drag_move: Option<Callback<f64>>,
    #[prop(optional)] on_drag_end: Option<Callback<()>>,
) -> impl IntoView {
    let photo = RwSignal::new(0_usize);
    let images = profile.images.clone();
    let image_count = images.len();
    let image_src = move || images.get(photo.get()).cloned().unwrap_or_default();

    let style = move || if stacked { String::new() } else { card_style(offset.get(), dragging.get()) };
    let hint = move || if stacked { SwipeHint::None } else { swipe_hint(offset.get()) };

    let prefs = profile
        .preferences
        .labels()
        .into_iter()
        .map(|label| view! { <span class="chip chip--muted">{label}</span> })
        .collect::<Vec<_>>();
    let interests = profile
        .interests
        .iter()
        .map(|i| view! { <span class="chip">{i.clone()}</span> })
        .collect::<Vec<_>>();
    let dots = (0..image_count)
        .map(|i| view! { <span class="match-card__dot" class:match-card__dot--active=move || photo.get() == i></span> })
        .collect::<Vec<_>>();

    view! {
        <article
            class="match-card"
            class:match-card--stacked=stacked
            class:match-card--dragging=move || dragging.get() && !stacked
            style=style
            on:pointerdown=move |ev: leptos::ev::PointerEvent| {
                if let Some(cb) = on_drag_start {
                    cb.run(f64::from(ev.client_x()));
                }
            }
            on:pointermove=move |ev: leptos::ev::PointerEvent| {
                if let Some(cb) = on_drag_move {
                    cb.run(f64::from(ev.client_x()));
                }
            }
            on:pointerup=move |_| {
                if let Some(cb) = on_drag_end {
                    cb.run(());
                }
            }
            on:pointerleave=move |_| {
                if let Some(cb) = on_drag_end {
                    cb.run(());
                }
            }
        >
            <div class="match-card__photo">
                <img src=image_src alt=profile.name.clone() draggable="false"/>
                <div class="match-card__dots">{dots}</div>
                <button
                    class="match-card__nav match-card__nav--prev"
                    aria-label="Previous photo"
                    on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                    on:click=move |_| photo.update(|p| *p = step_photo(*p, image_count, false))
                ></button>
                <button
                    class="match-card__nav match-card__nav--next"
                    aria-label="Next photo"
                    on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                    on:click=move |_| photo.update(|p| *p = step_photo(*p, image_count, true))
                ></button>
                <span class="match-card__stamp match-card__stamp--like" class:visible=move || hint() == SwipeHint::Like>
                    "LIKE"
                </span>
                <span class="match-card__stamp match-card__stamp--nope" class:visible=move || hint() == SwipeHint::Nope>
                    "NOPE"
                </span>
                <span class="match-card__compat">{format!("{}% match", profile.compatibility)}</span>
            </div>
            <div class="match-card__body">
                <h2 class="match-card__name">
                    {profile.name.clone()}
                    <span class="match-card__age">{format!(", {}", profile.age)}</span>
                </h2>
                <p class="match-card__meta">{format!("{} · {}", profile.occupation, profile.location)}</p>
                <p class="match-card__budget">{format!("Budget {}", monthly_price(profile.budget))}</p>
                <p class="match-card__bio">{profile.bio.clone()}</p>
                <div class="match-card__chips">{prefs}</div>
                <div class="match-card__chips">{interests}</div>
            </div>
        </article>
    }
}
