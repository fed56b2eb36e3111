use super::*;

fn thread(id: u32, participant: &str, unread: u32) -> Conversation {
    Conversation {
        id,
        participant: participant.to_owned(),
        avatar_url: None,
        online: false,
        unread,
        messages: vec![Message {
            id: format!("m{id}"),
            from_me: false,
            body: "Hello there, nice to meet you".to_owned(),
            sent_at: "09:00".to_owned(),
        }],
    }
}

fn inbox() -> InboxState {
    InboxState::new(vec![thread(1, "Maya Chen", 2), thread(2, "Priya Nair", 0), thread(3, "Sofia Rossi", 1)])
}

#[test]
fn select_marks_thread_read() {
    let mut state = inbox();
    assert_eq!(state.total_unread(), 3);
    state.select(1);
    assert_eq!(state.active, Some(1));
    assert_eq!(state.total_unread(), 1);
}

#[test]
fn select_unknown_thread_is_ignored() {
    let mut state = inbox();
    state.select(42);
    assert_eq!(state.active, None);
}

#[test]
fn send_appends_and_moves_thread_to_top() {
    let mut state = inbox();
    state.select(3);
    let sent = state.send("  See you Saturday!  ", "10:15").unwrap();
    assert_eq!(sent.body, "See you Saturday!");
    assert!(sent.from_me);
    assert_eq!(state.conversations[0].id, 3);
    assert_eq!(state.active_conversation().and_then(|c| c.last_message()), Some(&sent));
}

#[test]
fn send_rejects_blank_and_oversized_messages() {
    let mut state = inbox();
    state.select(1);
    assert_eq!(state.send("   ", "10:00"), Err(MessageError::Empty));
    let long = "x".repeat(MAX_MESSAGE_LEN + 1);
    assert_eq!(state.send(&long, "10:00"), Err(MessageError::TooLong { max: MAX_MESSAGE_LEN }));
    assert_eq!(state.conversations[0].messages.len(), 1);
}

#[test]
fn send_requires_active_thread() {
    let mut state = inbox();
    assert_eq!(state.send("hi", "10:00"), Err(MessageError::NoConversation));
}

#[test]
fn visible_filters_by_participant() {
    let mut state = inbox();
    state.query = "  ROSSI".to_owned();
    let names: Vec<String> = state.visible().into_iter().map(|c| c.participant).collect();
    assert_eq!(names, vec!["Sofia Rossi".to_owned()]);
    state.query.clear();
    assert_eq!(state.visible().len(), 3);
}

#[test]
fn preview_truncates_and_prefixes_own_messages() {
    let mut convo = thread(1, "Maya", 0);
    assert_eq!(preview(&convo, 5), "Hello…");
    convo.messages[0].from_me = true;
    assert_eq!(preview(&convo, 100), "You: Hello there, nice to meet you");
    convo.messages.clear();
    assert_eq!(preview(&convo, 5), "");
}
