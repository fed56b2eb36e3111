//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, cards and forms while reading/writing
//! shared state from Leptos context providers.

pub mod conversation_list;
pub mod footer;
pub mod form;
pub mod guarded;
pub mod match_card;
pub mod message_thread;
pub mod navbar;
pub mod plan_card;
pub mod property_card;
pub mod toast_host;
