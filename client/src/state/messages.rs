//! Inbox state: conversation list, active thread, outgoing messages.
//!
//! Threads live in memory for the lifetime of the tab; nothing is sent anywhere.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::data::types::{Conversation, Message};

pub const MAX_MESSAGE_LEN: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("Type a message first")]
    Empty,
    #[error("Messages can be at most {max} characters")]
    TooLong { max: usize },
    #[error("Pick a conversation to reply to")]
    NoConversation,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InboxState {
    /// Threads, most recent activity first.
    pub conversations: Vec<Conversation>,
    pub active: Option<u32>,
    pub query: String,
}

impl InboxState {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self { conversations, active: None, query: String::new() }
    }

    /// Open a thread and mark it read. Unknown ids are ignored.
    pub fn select(&mut self, id: u32) {
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) {
            conversation.unread = 0;
            self.active = Some(id);
        }
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        let id = self.active?;
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Append an outgoing message to the active thread and bump it to the top.
    ///
    /// # Errors
    ///
    /// Rejects blank or oversized bodies and sends without an active thread.
    pub fn send(&mut self, body: &str, sent_at: &str) -> Result<Message, MessageError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(MessageError::Empty);
        }
        if body.chars().count() > MAX_MESSAGE_LEN {
            return Err(MessageError::TooLong { max: MAX_MESSAGE_LEN });
        }
        let id = self.active.ok_or(MessageError::NoConversation)?;
        let idx = self
            .conversations
            .iter()
            .position(|c| c.id == id)
            .ok_or(MessageError::NoConversation)?;

        let message = Message {
            id: uuid::Uuid::new_v4().to_string(),
            from_me: true,
            body: body.to_owned(),
            sent_at: sent_at.to_owned(),
        };
        let mut conversation = self.conversations.remove(idx);
        conversation.messages.push(message.clone());
        self.conversations.insert(0, conversation);
        Ok(message)
    }

    /// Threads whose participant matches the search box.
    pub fn visible(&self) -> Vec<Conversation> {
        let query = self.query.trim().to_lowercase();
        self.conversations
            .iter()
            .filter(|c| query.is_empty() || c.participant.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread).sum()
    }
}

/// One-line preview of the latest message for the thread list.
pub fn preview(conversation: &Conversation, max_chars: usize) -> String {
    let Some(last) = conversation.last_message() else {
        return String::new();
    };
    let prefix = if last.from_me { "You: " } else { "" };
    let mut text: String = last.body.chars().take(max_chars).collect();
    if last.body.chars().count() > max_chars {
        text.push('…');
    }
    format!("{prefix}{text}")
}
