use super::*;

fn valid_registration() -> RegisterForm {
    RegisterForm {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "engine42".to_owned(),
        confirm_password: "engine42".to_owned(),
        accept_terms: true,
    }
}

#[test]
fn name_from_email_title_cases_local_part() {
    assert_eq!(name_from_email("jane.doe@example.com"), "Jane Doe");
    assert_eq!(name_from_email("MAX_power+test@x.io"), "Max Power Test");
    assert_eq!(name_from_email("@x.io"), "Nestmate User");
}

#[test]
fn login_rejects_empty_fields() {
    assert_eq!(check_login("", "secret"), Err(AuthError::MissingFields));
    assert_eq!(check_login("a@b.com", ""), Err(AuthError::MissingFields));
    assert_eq!(AuthError::MissingFields.to_string(), "Please fill in all fields");
}

#[test]
fn login_rejects_malformed_email() {
    assert_eq!(check_login("not-an-email", "secret"), Err(AuthError::Invalid(ValidationError::InvalidEmail)));
    assert_eq!(check_login("a@b.com", "secret"), Ok(()));
}

#[test]
fn register_accepts_valid_form() {
    assert_eq!(check_register(&valid_registration()), Ok(()));
}

#[test]
fn register_reports_every_failing_field() {
    let form = RegisterForm {
        name: String::new(),
        email: "bad".to_owned(),
        password: "short".to_owned(),
        confirm_password: "other".to_owned(),
        accept_terms: false,
    };
    let Err(AuthError::Form(errors)) = check_register(&form) else {
        panic!("expected field errors");
    };
    for field in [Field::Name, Field::Email, Field::Password] {
        assert!(errors.message(field).is_some(), "{field:?} should be flagged");
    }
    assert_eq!(errors.message(Field::Terms).as_deref(), Some("You must accept the terms to continue"));
    assert_eq!(errors.message(Field::ConfirmPassword).as_deref(), Some("Passwords do not match"));
}

#[test]
fn contact_with_short_message_shows_validation_error() {
    let form = ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: String::new(),
        message: "Too short".to_owned(),
    };
    let errors = check_contact(&form).unwrap_err();
    assert_eq!(errors.message(Field::Name), None);
    assert_eq!(errors.message(Field::Email), None);
    assert_eq!(errors.message(Field::Message).as_deref(), Some("Message must be at least 10 characters"));
}

#[test]
fn contact_subject_is_optional() {
    let form = ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: String::new(),
        message: "I would like to list my apartment.".to_owned(),
    };
    assert_eq!(check_contact(&form), Ok(()));
}

#[test]
fn profile_rules_cover_avatar_url() {
    let mut user = User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        avatar_url: Some("javascript:alert(1)".to_owned()),
    };
    let errors = check_profile(&user).unwrap_err();
    assert!(errors.message(Field::AvatarUrl).is_some());
    user.avatar_url = None;
    assert_eq!(check_profile(&user), Ok(()));
}

#[test]
fn password_change_requires_current_and_matching_confirmation() {
    let change = PasswordChange { current: String::new(), new: "engine42".to_owned(), confirm: "engine43".to_owned() };
    let Err(AuthError::Form(errors)) = check_password_change(&change) else {
        panic!("expected field errors");
    };
    assert!(errors.message(Field::CurrentPassword).is_some());
    assert!(errors.message(Field::ConfirmPassword).is_some());
    assert!(errors.message(Field::Password).is_none());
}
