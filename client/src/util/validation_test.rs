use super::*;

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("  first.last+tag@mail.co.uk "));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["", "plain", "@example.com", "user@", "user@host", "user@.com", "a@b@c.com", "a b@c.com", "a@b.c"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn email_rejects_empty_or_hyphenated_domain_labels() {
    for bad in ["a@b..com", "a@-x.com", "a@x-.com", "a@mail.example.com.", "a@mail..co.uk"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
    assert!(is_valid_email("a@my-host.example.com"));
}

#[test]
fn email_validator_distinguishes_missing_from_malformed() {
    assert_eq!(email("  "), Err(ValidationError::Required("Email")));
    assert_eq!(email("nope"), Err(ValidationError::InvalidEmail));
    assert_eq!(email("a@b.com"), Ok(()));
}

#[test]
fn display_name_enforces_length() {
    assert_eq!(display_name("Ada"), Ok(()));
    assert_eq!(display_name(""), Err(ValidationError::Required("Name")));
    let long = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(display_name(&long), Err(ValidationError::TooLong { field: "Name", max: MAX_NAME_LEN }));
}

#[test]
fn new_password_rules() {
    assert_eq!(new_password(""), Err(ValidationError::Required("Password")));
    assert_eq!(new_password("abc1"), Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN }));
    assert_eq!(new_password("abcdefgh"), Err(ValidationError::PasswordTooWeak));
    assert_eq!(new_password("12345678"), Err(ValidationError::PasswordTooWeak));
    assert_eq!(new_password("abcdefg1"), Ok(()));
}

#[test]
fn password_confirmation_must_match() {
    assert_eq!(password_confirmation("abcdefg1", "abcdefg1"), Ok(()));
    assert_eq!(password_confirmation("abcdefg1", "abcdefg2"), Err(ValidationError::PasswordMismatch));
    assert_eq!(
        password_confirmation("abcdefg1", ""),
        Err(ValidationError::Required("Password confirmation"))
    );
}

#[test]
fn avatar_url_allows_empty_or_http() {
    assert_eq!(avatar_url(""), Ok(()));
    assert_eq!(avatar_url("https://img.test/me.png"), Ok(()));
    assert_eq!(avatar_url("ftp://img.test/me.png"), Err(ValidationError::InvalidUrl));
}

#[test]
fn short_contact_message_is_rejected() {
    let err = contact_message("hi there").unwrap_err();
    assert_eq!(err.to_string(), "Message must be at least 10 characters");
    assert_eq!(contact_message("Hello, I have a question."), Ok(()));
}

#[test]
fn field_errors_report_first_message_per_field() {
    let mut errors = FieldErrors::default();
    errors.check(Field::Email, email("nope"));
    errors.check(Field::Name, display_name("Ada"));
    errors.push(Field::Email, ValidationError::Required("Email"));
    assert_eq!(errors.message(Field::Email).as_deref(), Some("Please enter a valid email address"));
    assert_eq!(errors.message(Field::Name), None);
    assert!(!errors.is_empty());
}

#[test]
fn field_errors_into_result() {
    assert_eq!(FieldErrors::default().into_result(7), Ok(7));
    let mut errors = FieldErrors::default();
    errors.push(Field::Terms, ValidationError::TermsNotAccepted);
    assert!(errors.into_result(7).is_err());
}
