//! Seed threads for the inbox.

use super::types::{Conversation, Message};

fn message(conversation: u32, index: u32, from_me: bool, body: &str, sent_at: &str) -> Message {
    Message {
        id: format!("seed-{conversation}-{index}"),
        from_me,
        body: body.to_owned(),
        sent_at: sent_at.to_owned(),
    }
}

/// Inbox threads, most recent first.
pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: 1,
            participant: "Maya Chen".to_owned(),
            avatar_url: Some("https://i.pravatar.cc/160?img=1".to_owned()),
            online: true,
            unread: 2,
            messages: vec![
                message(1, 1, false, "Hi! We matched, excited to chat about the Brooklyn place.", "09:12"),
                message(1, 2, true, "Hey Maya! Yes, the loft looks great. When are you free to visit?", "09:20"),
                message(1, 3, false, "Saturday morning works for me.", "09:31"),
                message(1, 4, false, "Does your cat get along with plants? Asking for my monstera.", "09:32"),
            ],
        },
        Conversation {
            id: 2,
            participant: "Priya Nair".to_owned(),
            avatar_url: Some("https://i.pravatar.cc/160?img=3".to_owned()),
            online: false,
            unread: 0,
            messages: vec![
                message(2, 1, true, "Hi Priya, what's your ideal move-in date?", "Yesterday"),
                message(2, 2, false, "Early next month, after my exams.", "Yesterday"),
            ],
        },
        Conversation {
            id: 3,
            participant: "Sofia Rossi".to_owned(),
            avatar_url: Some("https://i.pravatar.cc/160?img=5".to_owned()),
            online: true,
            unread: 1,
            messages: vec![message(3, 1, false, "Pesto says hello. Are you okay with a cat?", "Mon")],
        },
        Conversation {
            id: 4,
            participant: "Nestmate Support".to_owned(),
            avatar_url: None,
            online: true,
            unread: 0,
            messages: vec![message(
                4,
                1,
                false,
                "Welcome to Nestmate! Reply here any time if you need help.",
                "Sun",
            )],
        },
    ]
}
