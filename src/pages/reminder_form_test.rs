use super::*;

#[test]
fn validate_reminder_input_requires_title_and_time() {
    assert_eq!(
        validate_reminder_input("", "2026-08-20T09:00"),
        Err("Title and remind time are required.")
    );
    assert_eq!(
        validate_reminder_input("Follow up", ""),
        Err("Title and remind time are required.")
    );
    assert_eq!(validate_reminder_input("Follow up", "2026-08-20T09:00"), Ok(()));
}

#[test]
fn build_reminder_payload_sends_exactly_the_filled_fields() {
    assert_eq!(
        build_reminder_payload("Follow up", "2026-08-20T09:00", None, ""),
        serde_json::json!({ "title": "Follow up", "remindAt": "2026-08-20T09:00" })
    );
}

#[test]
fn build_reminder_payload_links_the_application_when_given() {
    assert_eq!(
        build_reminder_payload("Follow up", "2026-08-20T09:00", Some(3), "email recruiter"),
        serde_json::json!({
            "title": "Follow up",
            "remindAt": "2026-08-20T09:00",
            "applicationId": 3,
            "notes": "email recruiter",
        })
    );
}
