use super::*;

fn user(name: &str) -> User {
    User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: name.to_owned(), avatar_url: None }
}

#[test]
fn initials_take_first_letters_of_two_words() {
    assert_eq!(user("ada lovelace").initials(), "AL");
    assert_eq!(user("Grace Brewster Hopper").initials(), "GB");
}

#[test]
fn initials_fall_back_for_blank_names() {
    assert_eq!(user("   ").initials(), "?");
}

#[test]
fn user_serializes_with_camel_case_keys() {
    let mut u = user("Ada");
    u.avatar_url = Some("https://img.test/a.png".to_owned());
    let value = serde_json::to_value(&u).unwrap();
    assert_eq!(value["avatarUrl"], "https://img.test/a.png");
}

#[test]
fn user_without_avatar_field_deserializes() {
    let raw = r#"{"id":"1","email":"a@b.com","name":"Ada"}"#;
    let u: User = serde_json::from_str(raw).unwrap();
    assert_eq!(u.avatar_url, None);
}

#[test]
fn preference_labels_describe_each_flag() {
    let prefs = Preferences { smoker: false, pets: true, night_owl: true, work_from_home: false };
    assert_eq!(prefs.labels(), vec!["Non-smoker", "Has pets", "Night owl"]);
}
