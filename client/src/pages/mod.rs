//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, form submission,
//! navigation) and delegates rendering details to `components`.

pub mod about;
pub mod choose_path;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod living_plan;
pub mod login;
pub mod matching;
pub mod messages;
pub mod not_found;
pub mod pricing;
pub mod properties;
pub mod property_detail;
pub mod register;
pub mod settings;
