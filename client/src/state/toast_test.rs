use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Saved");
    let b = state.push(ToastKind::Error, "Nope");
    assert!(b > a);
    assert_eq!(state.items[1].kind, ToastKind::Error);
}

#[test]
fn oldest_toasts_drop_past_the_visible_limit() {
    let mut state = ToastState::default();
    for n in 0..5 {
        state.push(ToastKind::Info, format!("toast {n}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].message, "toast 2");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Info, "b");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}
