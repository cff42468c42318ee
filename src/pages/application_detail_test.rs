use super::*;

#[test]
fn parse_route_id_accepts_numeric_segment() {
    assert_eq!(parse_route_id(Some("42".to_owned())), Some(42));
}

#[test]
fn parse_route_id_rejects_missing_or_garbage_segments() {
    assert_eq!(parse_route_id(None), None);
    assert_eq!(parse_route_id(Some("abc".to_owned())), None);
    assert_eq!(parse_route_id(Some("".to_owned())), None);
}

#[test]
fn not_found_message_matches_screen_contract() {
    assert_eq!(NOT_FOUND_MESSAGE, "Application not found. Redirecting...");
}
