use std::collections::HashSet;

use super::*;

#[test]
fn profile_ids_are_unique() {
    let all = profiles();
    let ids: HashSet<u32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn property_ids_are_unique() {
    let all = properties();
    let ids: HashSet<u32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn compatibility_scores_are_percentages() {
    assert!(profiles().iter().all(|p| p.compatibility <= 100));
}

#[test]
fn lookup_by_id_finds_known_records() {
    let first = profiles().remove(0);
    assert_eq!(profile(first.id), Some(first));
    let listing = properties().remove(0);
    assert_eq!(property(listing.id), Some(listing));
}

#[test]
fn lookup_by_unknown_id_is_none() {
    assert!(profile(9_999).is_none());
    assert!(property(9_999).is_none());
}

#[test]
fn seeded_conversations_have_messages() {
    assert!(conversations().iter().all(|c| !c.messages.is_empty()));
}
