//! Thread list with search for the inbox sidebar.

use leptos::prelude::*;

use crate::state::messages::{InboxState, preview};

const PREVIEW_CHARS: usize = 48;

#[component]
pub fn ConversationList(inbox: RwSignal<InboxState>) -> impl IntoView {
    view! {
        <aside class="inbox__list">
            <input
                class="field__input inbox__search"
                type="search"
                placeholder="Search conversations"
                prop:value=move || inbox.with(|s| s.query.clone())
                on:input=move |ev| inbox.update(|s| s.query = event_target_value(&ev))
            />
            <ul class="inbox__threads">
                {move || {
                    let active = inbox.with(|s| s.active);
                    let visible = inbox.with(InboxState::visible);
                    if visible.is_empty() {
                        return view! { <li class="inbox__empty">"No conversations found"</li> }.into_any();
                    }
                    visible
                        .into_iter()
                        .map(|c| {
                            let id = c.id;
                            let initial = c.participant.chars().next().unwrap_or('?');
                            let snippet = preview(&c, PREVIEW_CHARS);
                            let time = c.last_message().map(|m| m.sent_at.clone()).unwrap_or_default();
                            view! {
                                <li>
                                    <button
                                        class="inbox__thread"
                                        class:inbox__thread--active=active == Some(id)
                                        class:inbox__thread--unread={c.unread > 0}
                                        on:click=move |_| inbox.update(|s| s.select(id))
                                    >
                                        <span class="avatar" class:avatar--online=c.online>
                                            {match c.avatar_url {
                                                Some(url) => view! { <img src=url alt=""/> }.into_any(),
                                                None => view! { <span>{initial.to_string()}</span> }.into_any(),
                                            }}
                                        </span>
                                        <span class="inbox__thread-text">
                                            <span class="inbox__thread-name">{c.participant.clone()}</span>
                                            <span class="inbox__thread-preview">{snippet}</span>
                                        </span>
                                        <span class="inbox__thread-meta">
                                            <span class="inbox__thread-time">{time}</span>
                                            {(c.unread > 0).then(|| view! { <span class="badge">{c.unread}</span> })}
                                        </span>
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>
        </aside>
    }
}
