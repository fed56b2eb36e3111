//! Active conversation view with the reply composer.

use leptos::prelude::*;

use crate::components::toast_host::notify;
use crate::state::messages::{InboxState, MAX_MESSAGE_LEN};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::clock;

#[component]
pub fn MessageThread(inbox: RwSignal<InboxState>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(String::new());

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = draft.get_untracked();
        let mut result = Ok(());
        inbox.update(|s| result = s.send(&body, &clock::now_label()).map(|_| ()));
        match result {
            Ok(()) => draft.set(String::new()),
            Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
        }
    };

    view! {
        <section class="inbox__thread-view">
            {move || match inbox.with(|s| s.active_conversation().cloned()) {
                None => view! {
                    <div class="inbox__placeholder">
                        <p>"Select a conversation to start chatting"</p>
                    </div>
                }
                .into_any(),
                Some(conversation) => {
                    let status = if conversation.online { "Online" } else { "Offline" };
                    let messages = conversation
                        .messages
                        .into_iter()
                        .map(|m| {
                            view! {
                                <li class="bubble" class:bubble--mine=m.from_me>
                                    <p class="bubble__body">{m.body}</p>
                                    <time class="bubble__time">{m.sent_at}</time>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>();
                    view! {
                        <header class="inbox__thread-header">
                            <h2>{conversation.participant}</h2>
                            <span class="inbox__status" class:inbox__status--online=conversation.online>{status}</span>
                        </header>
                        <ul class="inbox__messages">{messages}</ul>
                    }
                    .into_any()
                }
            }}
            <form class="inbox__composer" on:submit=on_send>
                <textarea
                    class="field__input inbox__input"
                    rows="2"
                    maxlength=MAX_MESSAGE_LEN.to_string()
                    placeholder="Write a message…"
                    disabled=move || inbox.with(|s| s.active.is_none())
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || inbox.with(|s| s.active.is_none()) || draft.with(|d| d.trim().is_empty())
                >
                    "Send"
                </button>
            </form>
        </section>
    }
}
