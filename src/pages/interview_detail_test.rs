use super::*;

#[test]
fn not_found_message_matches_screen_contract() {
    assert_eq!(NOT_FOUND_MESSAGE, "Interview not found. Redirecting...");
}
