//! Plain records shared by pages, components and state modules.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so the JSON stored in `localStorage`
//! keeps the shape the browser side has always used (`avatarUrl`, `likesYou`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in (mock) user kept under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Random identifier minted at mock login/registration.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Up to two uppercase initials for avatar placeholders.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() { "?".to_owned() } else { initials }
    }
}

/// Lifestyle flags shown on match cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub smoker: bool,
    pub pets: bool,
    pub night_owl: bool,
    pub work_from_home: bool,
}

impl Preferences {
    /// Human-readable labels for the flags that are set.
    pub fn labels(self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        labels.push(if self.smoker { "Smoker" } else { "Non-smoker" });
        if self.pets {
            labels.push("Has pets");
        }
        labels.push(if self.night_owl { "Night owl" } else { "Early bird" });
        if self.work_from_home {
            labels.push("Works from home");
        }
        labels
    }
}

/// A candidate roommate in the swipe queue. Static mock data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchProfile {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub occupation: String,
    pub location: String,
    pub bio: String,
    pub images: Vec<String>,
    /// Static compatibility percentage (0-100).
    pub compatibility: u8,
    /// Monthly budget in whole currency units.
    pub budget: u32,
    pub preferences: Preferences,
    pub interests: Vec<String>,
    /// Whether this profile already liked the user; a right swipe makes a match.
    pub likes_you: bool,
}

/// A property listing. Static mock data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub location: String,
    /// Monthly rent in whole currency units.
    pub price: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub image: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub tags: Vec<String>,
}

/// One message inside a conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from_me: bool,
    pub body: String,
    /// Display label such as `"09:41"` or `"Yesterday"`.
    pub sent_at: String,
}

/// An inbox thread with a single other participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: u32,
    pub participant: String,
    pub avatar_url: Option<String>,
    pub online: bool,
    pub unread: u32,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
