//! Static mock data standing in for a backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list the UI shows (profiles, listings, inbox) is built from these
//! constructors. Nothing here is mutated; state modules clone what they need.

pub mod conversations;
pub mod profiles;
pub mod properties;
pub mod types;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub use conversations::conversations;
pub use profiles::profiles;
pub use properties::properties;

use types::{MatchProfile, Property};

/// Look up a static match profile by id.
pub fn profile(id: u32) -> Option<MatchProfile> {
    profiles().into_iter().find(|p| p.id == id)
}

/// Look up a static property listing by id.
pub fn property(id: u32) -> Option<Property> {
    properties().into_iter().find(|p| p.id == id)
}
