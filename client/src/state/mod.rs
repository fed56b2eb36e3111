//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `onboarding`, `matching`, etc.) so
//! pages depend on small focused models. The pure transitions live here;
//! pages wrap them in signals.

pub mod auth;
pub mod matching;
pub mod messages;
pub mod onboarding;
pub mod properties;
pub mod session;
pub mod toast;
pub mod ui;
