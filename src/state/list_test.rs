use super::*;

#[test]
fn list_state_default_is_loading() {
    let state = ListState::<i64>::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.error, None);
    assert!(!state.delete_mode);
}

#[test]
fn loaded_settles_with_items() {
    let state = ListState::loaded(vec![1, 2, 3]);
    assert!(!state.loading);
    assert_eq!(state.items, vec![1, 2, 3]);
    assert_eq!(state.error, None);
}

#[test]
fn failed_settles_with_message() {
    let state = ListState::<i64>::failed("boom".to_owned());
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.error, Some("boom".to_owned()));
}

#[test]
fn double_toggle_restores_original_state_and_label() {
    let mut state = ListState::loaded(vec![1]);
    let before = (state.delete_mode, delete_mode_label(state.delete_mode));

    state.toggle_delete_mode();
    assert!(state.delete_mode);
    assert_eq!(delete_mode_label(state.delete_mode), "Done");

    state.toggle_delete_mode();
    assert_eq!((state.delete_mode, delete_mode_label(state.delete_mode)), before);
    assert_eq!(delete_mode_label(state.delete_mode), "Delete");
}

#[test]
fn remove_where_splices_exactly_the_matching_item() {
    let mut state = ListState::loaded(vec![10, 20, 30]);
    state.remove_where(|id| *id == 20);
    assert_eq!(state.items, vec![10, 30]);
}

#[test]
fn remove_where_is_noop_for_unknown_id() {
    let mut state = ListState::loaded(vec![10, 20]);
    state.remove_where(|id| *id == 99);
    assert_eq!(state.items, vec![10, 20]);
}
