//! Inbox page: thread list beside the active conversation.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::conversation_list::ConversationList;
use crate::components::guarded::Guarded;
use crate::components::message_thread::MessageThread;
use crate::routes::AppRoute;
use crate::state::messages::InboxState;

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <Guarded route=AppRoute::Messages>
            <Inbox/>
        </Guarded>
    }
}

#[component]
fn Inbox() -> impl IntoView {
    let inbox = expect_context::<RwSignal<InboxState>>();
    let query = use_query_map();

    // `/messages?thread=<id>` opens a conversation directly.
    Effect::new(move || {
        let requested = query.with(|q| q.get("thread").and_then(|raw| raw.parse::<u32>().ok()));
        if let Some(id) = requested {
            inbox.update(|s| s.select(id));
        }
    });

    view! {
        <section class="page inbox">
            <header class="page__header">
                <h1>"Messages"</h1>
            </header>
            <div class="inbox__layout">
                <ConversationList inbox=inbox/>
                <MessageThread inbox=inbox/>
            </div>
        </section>
    }
}
