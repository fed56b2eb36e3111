use super::*;

#[test]
fn outcome_toast_announces_matches() {
    let outcome = SwipeOutcome::Matched { profile_id: 3, name: "Maya".to_owned() };
    let (kind, message) = outcome_toast(&outcome).expect("toast");
    assert_eq!(kind, ToastKind::Success);
    assert!(message.contains("Maya"));
    assert!(message.starts_with("It's a match!"));
}

#[test]
fn outcome_toast_silent_for_likes_and_passes() {
    assert_eq!(outcome_toast(&SwipeOutcome::Liked { profile_id: 2 }), None);
    assert_eq!(outcome_toast(&SwipeOutcome::Passed { profile_id: 2 }), None);
}

#[test]
fn swipes_left_label_shows_limit() {
    assert_eq!(swipes_left_label(20), "20 / 20 swipes left today");
    assert_eq!(swipes_left_label(0), "0 / 20 swipes left today");
}
