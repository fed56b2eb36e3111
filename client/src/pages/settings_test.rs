use super::*;

fn base_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "jane@example.com".to_owned(),
        name: "Jane".to_owned(),
        avatar_url: Some("https://img.example/jane.png".to_owned()),
    }
}

#[test]
fn profile_draft_keeps_identity() {
    let draft = profile_draft(&base_user(), "Jane Doe", "jane.doe@example.com", "");
    assert_eq!(draft.id, "u-1");
    assert_eq!(draft.name, "Jane Doe");
    assert_eq!(draft.email, "jane.doe@example.com");
}

#[test]
fn profile_draft_blank_avatar_clears_it() {
    let draft = profile_draft(&base_user(), "Jane", "jane@example.com", "   ");
    assert_eq!(draft.avatar_url, None);
}

#[test]
fn profile_draft_trims_avatar() {
    let draft = profile_draft(&base_user(), "Jane", "jane@example.com", " https://x.io/a.png ");
    assert_eq!(draft.avatar_url.as_deref(), Some("https://x.io/a.png"));
}
