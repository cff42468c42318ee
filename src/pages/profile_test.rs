use super::*;

#[test]
fn validate_profile_input_requires_every_field() {
    assert_eq!(
        validate_profile_input("", "User", "t@e.com"),
        Err("First name, last name, and email are required.")
    );
    assert_eq!(
        validate_profile_input("Test", "User", "   "),
        Err("First name, last name, and email are required.")
    );
    assert_eq!(validate_profile_input("Test", "User", "t@e.com"), Ok(()));
}

#[test]
fn build_profile_payload_uses_camel_case_wire_names() {
    assert_eq!(
        build_profile_payload(" Test ", " User ", " test@example.com "),
        serde_json::json!({
            "firstName": "Test",
            "lastName": "User",
            "email": "test@example.com",
        })
    );
}
