use super::*;

#[test]
fn validate_interview_input_requires_round_and_time() {
    assert_eq!(
        validate_interview_input("", "2026-08-10T14:00"),
        Err("Round and scheduled time are required.")
    );
    assert_eq!(
        validate_interview_input("Onsite", "  "),
        Err("Round and scheduled time are required.")
    );
    assert_eq!(validate_interview_input("Onsite", "2026-08-10T14:00"), Ok(()));
}

#[test]
fn parse_optional_application_id_treats_empty_as_unlinked() {
    assert_eq!(parse_optional_application_id(""), Ok(None));
    assert_eq!(parse_optional_application_id("   "), Ok(None));
}

#[test]
fn parse_optional_application_id_parses_numbers() {
    assert_eq!(parse_optional_application_id(" 42 "), Ok(Some(42)));
}

#[test]
fn parse_optional_application_id_rejects_garbage() {
    assert_eq!(
        parse_optional_application_id("acme"),
        Err("Application ID must be a number.")
    );
}

#[test]
fn build_interview_payload_sends_exactly_the_filled_fields() {
    assert_eq!(
        build_interview_payload("Onsite", "2026-08-10T14:00", None, "", ""),
        serde_json::json!({ "round": "Onsite", "scheduledAt": "2026-08-10T14:00" })
    );
}

#[test]
fn build_interview_payload_links_the_application_when_given() {
    assert_eq!(
        build_interview_payload("Onsite", "2026-08-10T14:00", Some(7), "Zoom", "bring laptop"),
        serde_json::json!({
            "round": "Onsite",
            "scheduledAt": "2026-08-10T14:00",
            "applicationId": 7,
            "location": "Zoom",
            "notes": "bring laptop",
        })
    );
}
