use super::*;

#[test]
fn parse_stored_accepts_only_booleans() {
    assert_eq!(parse_stored("true"), Some(true));
    assert_eq!(parse_stored("false"), Some(false));
    assert_eq!(parse_stored("yes"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_light_outside_the_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
