//! Stand-ins for network calls.
//!
//! ARCHITECTURE
//! ============
//! The app has no backend; `mock_api` keeps the request/response shape of a
//! real client so pages stay written against async calls.

pub mod mock_api;
