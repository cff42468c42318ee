use super::*;

#[test]
fn validate_application_input_requires_title_and_company() {
    assert_eq!(
        validate_application_input("", "Acme"),
        Err("Title and company are required.")
    );
    assert_eq!(
        validate_application_input("Engineer", "   "),
        Err("Title and company are required.")
    );
    assert_eq!(validate_application_input("Engineer", "Acme"), Ok(()));
}

#[test]
fn build_application_payload_sends_exactly_the_filled_fields() {
    assert_eq!(
        build_application_payload("Engineer", "Acme", "", "", ""),
        serde_json::json!({ "title": "Engineer", "company": "Acme" })
    );
}

#[test]
fn build_application_payload_includes_optional_fields_when_filled() {
    assert_eq!(
        build_application_payload("Engineer", "Acme", "applied", "referred by Sam", "2026-08-01"),
        serde_json::json!({
            "title": "Engineer",
            "company": "Acme",
            "status": "applied",
            "notes": "referred by Sam",
            "dateApplied": "2026-08-01",
        })
    );
}

#[test]
fn build_application_payload_trims_whitespace() {
    assert_eq!(
        build_application_payload(" Engineer ", " Acme ", " ", "", ""),
        serde_json::json!({ "title": "Engineer", "company": "Acme" })
    );
}
