//! Swipe matching page.
//!
//! DESIGN
//! ======
//! `MatchingState` (shared through context) owns the queue, the drag offset
//! and the daily counter; this page only translates pointer and button input
//! into state transitions and persists after every committed swipe. A slow
//! poll keeps the midnight countdown fresh and rolls the day over when the
//! local date changes while the page is open.

#[cfg(test)]
#[path = "matching_test.rs"]
mod matching_test;

use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::components::match_card::MatchCard;
use crate::components::toast_host::notify;
use crate::routes::AppRoute;
use crate::state::matching::{DAILY_SWIPE_LIMIT, MatchingState, SwipeDirection, SwipeError, SwipeOutcome};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::clock;

#[cfg(feature = "hydrate")]
const COUNTDOWN_POLL_SECS: u64 = 30;

/// Toast to show for a committed swipe, if any.
pub fn outcome_toast(outcome: &SwipeOutcome) -> Option<(ToastKind, String)> {
    match outcome {
        SwipeOutcome::Matched { name, .. } => {
            Some((ToastKind::Success, format!("It's a match! You and {name} like each other.")))
        }
        SwipeOutcome::Liked { .. } | SwipeOutcome::Passed { .. } => None,
    }
}

/// Counter line under the card stack.
pub fn swipes_left_label(remaining: u32) -> String {
    format!("{remaining} / {DAILY_SWIPE_LIMIT} swipes left today")
}

#[component]
pub fn MatchingPage() -> impl IntoView {
    view! {
        <Guarded route=AppRoute::Matching>
            <MatchingBoard/>
        </Guarded>
    }
}

#[component]
fn MatchingBoard() -> impl IntoView {
    let matching = expect_context::<RwSignal<MatchingState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let today = RwSignal::new(clock::today_key());
    let countdown = RwSignal::new(clock::seconds_until_reset());
    let start_x = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(COUNTDOWN_POLL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                countdown.set(clock::seconds_until_reset());
                let key = clock::today_key();
                if key != today.get_untracked() {
                    leptos::logging::log!("swipe quota reset for {key}");
                    matching.update(|m| m.swipes = std::mem::take(&mut m.swipes).for_day(&key));
                    today.set(key);
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let current = Memo::new(move |_| matching.with(|m| m.current().cloned()));
    let upcoming = Memo::new(move |_| matching.with(|m| m.upcoming().cloned()));
    let remaining = Memo::new(move |_| {
        let day = today.get();
        matching.with(|m| m.remaining_today(&day))
    });
    let exhausted = Memo::new(move |_| matching.with(MatchingState::is_exhausted));
    let offset = Signal::derive(move || matching.with(|m| m.drag_offset));
    let dragging = Signal::derive(move || matching.with(|m| m.dragging));

    let handle = move |result: Result<Option<SwipeOutcome>, SwipeError>| match result {
        Ok(Some(outcome)) => {
            matching.with_untracked(MatchingState::persist);
            if let Some((kind, message)) = outcome_toast(&outcome) {
                notify(toasts, kind, message);
            }
        }
        Ok(None) => {}
        Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
    };

    let swipe = move |direction: SwipeDirection| {
        let day = today.get_untracked();
        let mut result = Err(SwipeError::QueueEmpty);
        matching.update(|m| result = m.swipe(direction, &day).map(Some));
        handle(result);
    };

    let on_drag_start = Callback::new(move |x: f64| {
        if remaining.get_untracked() == 0 {
            return;
        }
        start_x.set(x);
        matching.update(MatchingState::begin_drag);
    });
    let on_drag_move = Callback::new(move |x: f64| {
        if matching.with_untracked(|m| m.dragging) {
            let dx = x - start_x.get_untracked();
            matching.update(|m| m.drag_to(dx));
        }
    });
    let on_drag_end = Callback::new(move |()| {
        if !matching.with_untracked(|m| m.dragging) {
            return;
        }
        let day = today.get_untracked();
        let mut result = Ok(None);
        matching.update(|m| result = m.end_drag(&day));
        handle(result);
    });

    let limit_reached = move || remaining.get() == 0;
    let buttons_disabled = move || !matching.with(|m| m.can_swipe(&today.get()));

    view! {
        <section class="page matching">
            <header class="page__header matching__header">
                <h1>"Discover"</h1>
                <p class="matching__counter">{move || swipes_left_label(remaining.get())}</p>
            </header>

            <div class="matching__layout">
                <div class="matching__deck">
                    <Show when=limit_reached>
                        <div class="card matching__panel">
                            <h2>"That's all for today"</h2>
                            <p>
                                {format!("You've used all {DAILY_SWIPE_LIMIT} swipes. New swipes in ")}
                                <strong>{move || clock::format_countdown(countdown.get())}</strong>
                                "."
                            </p>
                            <a class="btn btn--ghost" href=AppRoute::Messages.path()>"Chat with your matches"</a>
                        </div>
                    </Show>
                    <Show when=move || !limit_reached() && exhausted.get()>
                        <div class="card matching__panel">
                            <h2>"You've seen everyone"</h2>
                            <p>"Check back later for new people, or take another look."</p>
                            <button class="btn btn--primary" on:click=move |_| matching.update(MatchingState::restart)>
                                "Start over"
                            </button>
                        </div>
                    </Show>
                    <Show when=move || !limit_reached() && !exhausted.get()>
                        <div class="card-stack">
                            {move || {
                                upcoming
                                    .get()
                                    .map(|profile| {
                                        view! {
                                            <MatchCard profile=profile offset=0.0 dragging=false stacked=true/>
                                        }
                                    })
                            }}
                            {move || {
                                current
                                    .get()
                                    .map(|profile| {
                                        view! {
                                            <MatchCard
                                                profile=profile
                                                offset=offset
                                                dragging=dragging
                                                on_drag_start=on_drag_start
                                                on_drag_move=on_drag_move
                                                on_drag_end=on_drag_end
                                            />
                                        }
                                    })
                            }}
                        </div>
                    </Show>
                    <div class="matching__actions">
                        <button
                            class="btn btn--round btn--pass"
                            aria-label="Pass"
                            disabled=buttons_disabled
                            on:click=move |_| swipe(SwipeDirection::Left)
                        >
                            "✕"
                        </button>
                        <button
                            class="btn btn--round btn--like"
                            aria-label="Like"
                            disabled=buttons_disabled
                            on:click=move |_| swipe(SwipeDirection::Right)
                        >
                            "♥"
                        </button>
                    </div>
                </div>

                <aside class="card matching__matches">
                    <h2>"Matches"</h2>
                    {move || {
                        let matched = matching.with(MatchingState::matched_profiles);
                        if matched.is_empty() {
                            return view! { <p class="empty">"Mutual likes show up here."</p> }.into_any();
                        }
                        view! {
                            <ul class="match-list">
                                {matched
                                    .into_iter()
                                    .map(|profile| {
                                        let avatar = profile.images.first().cloned().unwrap_or_default();
                                        view! {
                                            <li class="match-list__item">
                                                <img class="avatar" src=avatar alt=profile.name.clone()/>
                                                <div>
                                                    <strong>{profile.name.clone()}</strong>
                                                    <span class="match-list__meta">{profile.occupation.clone()}</span>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }}
                    <a href=AppRoute::Messages.path()>"Go to messages →"</a>
                </aside>
            </div>
        </section>
    }
}
