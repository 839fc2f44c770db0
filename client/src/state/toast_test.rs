use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.success("Saved");
    let b = state.error("Nope");
    assert!(b > a);
    assert_eq!(state.items[0].kind, ToastKind::Success);
    assert_eq!(state.items[1].message, "Nope");
}

#[test]
fn oldest_toasts_are_evicted_past_the_visible_limit() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.success(format!("t{i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.items[0].message, "t2");
    assert_eq!(state.items[2].message, "t4");
}

#[test]
fn dismiss_removes_once() {
    let mut state = ToastState::default();
    let id = state.error("Failed to delete post");
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.items.is_empty());
}

#[test]
fn kinds_map_to_distinct_css_modifiers() {
    assert_ne!(ToastKind::Success.css_modifier(), ToastKind::Error.css_modifier());
}
