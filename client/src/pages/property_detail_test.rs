use super::*;

#[test]
fn parse_property_id_accepts_digits() {
    assert_eq!(parse_property_id(Some("4")), Some(4));
    assert_eq!(parse_property_id(Some(" 12 ")), Some(12));
}

#[test]
fn parse_property_id_rejects_missing_or_garbage() {
    assert_eq!(parse_property_id(None), None);
    assert_eq!(parse_property_id(Some("abc")), None);
    assert_eq!(parse_property_id(Some("")), None);
}

#[test]
fn similar_listings_excludes_self_and_respects_limit() {
    let catalog = crate::data::properties();
    let first = catalog[0].clone();
    let similar = similar_listings(&first, &catalog, 2);
    assert_eq!(similar.len(), 2);
    assert!(similar.iter().all(|p| p.id != first.id));
}

#[test]
fn similar_listings_prefers_shared_tags() {
    let catalog = crate::data::properties();
    let first = catalog[0].clone();
    let sharing = catalog.iter().filter(|p| p.id != first.id && p.tags.iter().any(|t| first.tags.contains(t))).count();
    let similar = similar_listings(&first, &catalog, 1);
    if sharing > 0 {
        assert!(similar[0].tags.iter().any(|t| first.tags.contains(t)));
    }
}
