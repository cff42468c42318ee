use super::*;

fn sample_user() -> User {
    User {
        username: "testuser".to_owned(),
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        email: "test@example.com".to_owned(),
    }
}

#[test]
fn session_state_default_is_loading_without_user() {
    let state = SessionState::default();
    assert!(state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn logged_out_clears_user_and_loading() {
    let state = SessionState::logged_out();
    assert!(!state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn logged_in_holds_fetched_user() {
    let user = sample_user();
    let state = SessionState::logged_in(user.clone());
    assert!(!state.loading);
    assert_eq!(state.user, Some(user));
}
