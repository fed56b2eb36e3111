use super::*;

#[test]
fn welcome_message_uses_first_name() {
    assert_eq!(welcome_message("Jane Doe"), "Welcome back, Jane!");
}

#[test]
fn welcome_message_single_word_name() {
    assert_eq!(welcome_message("Sam"), "Welcome back, Sam!");
}

#[test]
fn welcome_message_blank_name_falls_back() {
    assert_eq!(welcome_message(""), "Welcome back!");
    assert_eq!(welcome_message("   "), "Welcome back!");
}

#[test]
fn rejected_login_raises_error_toast() {
    let err = mock_api::check_login("", "secret").unwrap_err();
    assert_eq!(rejection_toast(&err), (ToastKind::Error, "Please fill in all fields".to_owned()));

    let err = mock_api::check_login("not-an-email", "secret").unwrap_err();
    let (kind, message) = rejection_toast(&err);
    assert_eq!(kind, ToastKind::Error);
    assert_eq!(message, "Please enter a valid email address");
}
