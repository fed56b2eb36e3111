use super::*;

#[test]
fn session_keys_keep_the_swipe_counter() {
    assert!(!SESSION_KEYS.contains(&DAILY_SWIPES_KEY));
    assert!(SESSION_KEYS.contains(&USER_KEY));
}

#[test]
fn decode_parses_valid_json() {
    let ids: Option<Vec<u32>> = decode(USER_MATCHES_KEY, "[1,3,5]");
    assert_eq!(ids, Some(vec![1, 3, 5]));
}

#[test]
fn decode_treats_malformed_json_as_absent() {
    let ids: Option<Vec<u32>> = decode(USER_MATCHES_KEY, "[1,3,");
    assert_eq!(ids, None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn reads_are_empty_outside_the_browser() {
    save_string(USER_PATH_KEY, "roommate");
    assert_eq!(load_string(USER_PATH_KEY), None);
    assert_eq!(load_json::<Vec<u32>>(USER_MATCHES_KEY), None);
    clear_all();
}
